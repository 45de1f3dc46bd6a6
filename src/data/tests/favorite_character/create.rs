use super::*;

/// Expect success and a captured date_added when favoriting an existing character
#[tokio::test]
async fn creates_favorite_character() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("luke").await?;
    let character = test.catalog().insert_character("Luke Skywalker", None).await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let result = favorite_repo.create(user.id, character.id).await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert_eq!(created.user_id, user.id);
    assert_eq!(created.character_id, character.id);

    Ok(())
}

/// Expect UniqueConstraintViolation naming both columns when favoriting twice
#[tokio::test]
async fn fails_for_duplicate_favorite() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("luke").await?;
    let character = test.catalog().insert_character("Luke Skywalker", None).await?;
    test.favorite()
        .insert_favorite_character(user.id, character.id)
        .await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let result = favorite_repo.create(user.id, character.id).await;

    assert!(matches!(
        result,
        Err(Error::UniqueConstraintViolation { entity: "favorite_character", ref fields })
            if fields == "user_id, character_id"
    ));

    Ok(())
}

/// Expect the same character to be favorited by different users
#[tokio::test]
async fn allows_same_character_for_different_users() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let luke = test.user().insert_user("luke").await?;
    let leia = test.user().insert_user("leia").await?;
    let character = test.catalog().insert_character("Han Solo", None).await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);

    assert!(favorite_repo.create(luke.id, character.id).await.is_ok());
    assert!(favorite_repo.create(leia.id, character.id).await.is_ok());

    Ok(())
}

/// Expect ReferentialIntegrityViolation on character_id when the character does not exist
#[tokio::test]
async fn fails_for_nonexistent_character() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("luke").await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let result = favorite_repo.create(user.id, 999).await;

    assert!(matches!(
        result,
        Err(Error::ReferentialIntegrityViolation { ref field, id: Some(999), .. })
            if field == "character_id"
    ));

    Ok(())
}

/// Expect ReferentialIntegrityViolation on user_id when the user does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let character = test.catalog().insert_character("Luke Skywalker", None).await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let result = favorite_repo.create(999, character.id).await;

    assert!(matches!(
        result,
        Err(Error::ReferentialIntegrityViolation { ref field, id: Some(999), .. })
            if field == "user_id"
    ));

    Ok(())
}

/// Expect Error when the favorite tables have not been created
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestSetup::new().await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let result = favorite_repo.create(1, 1).await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
