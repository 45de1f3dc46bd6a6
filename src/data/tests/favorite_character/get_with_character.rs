use super::*;

/// Expect the favorite to be returned with its character
#[tokio::test]
async fn returns_favorite_with_character() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("luke").await?;
    let character = test.catalog().insert_character("Yoda", None).await?;
    let favorite = test
        .favorite()
        .insert_favorite_character(user.id, character.id)
        .await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let result = favorite_repo.get_with_character(favorite.id).await;

    assert_eq!(result.unwrap(), Some((favorite, Some(character))));

    Ok(())
}

/// Expect None when the favorite does not exist
#[tokio::test]
async fn returns_none_for_nonexistent_favorite() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);

    assert!(matches!(favorite_repo.get_with_character(1).await, Ok(None)));
    assert!(matches!(favorite_repo.get_by_id(1).await, Ok(None)));

    Ok(())
}
