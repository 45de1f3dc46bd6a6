use super::*;

/// Expect the favorite to be removed while user and character remain
#[tokio::test]
async fn deletes_favorite() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("luke").await?;
    let character = test.catalog().insert_character("Yoda", None).await?;
    let favorite = test
        .favorite()
        .insert_favorite_character(user.id, character.id)
        .await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let result = favorite_repo.delete(favorite.id).await;

    assert_eq!(result.unwrap().rows_affected, 1);
    assert!(matches!(favorite_repo.get_by_id(favorite.id).await, Ok(None)));
    assert!(favorite_repo.create(user.id, character.id).await.is_ok());

    Ok(())
}

/// Expect no rows affected when the favorite does not exist
#[tokio::test]
async fn affects_nothing_for_nonexistent_favorite() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let result = favorite_repo.delete(1).await;

    assert_eq!(result.unwrap().rows_affected, 0);

    Ok(())
}
