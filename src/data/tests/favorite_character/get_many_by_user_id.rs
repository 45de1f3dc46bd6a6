use super::*;

/// Expect only the user's favorites, in insertion order, each with its character
#[tokio::test]
async fn returns_favorites_of_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let luke = test.user().insert_user("luke").await?;
    let leia = test.user().insert_user("leia").await?;
    let yoda = test.catalog().insert_character("Yoda", None).await?;
    let han = test.catalog().insert_character("Han Solo", None).await?;
    let first = test.favorite().insert_favorite_character(luke.id, yoda.id).await?;
    test.favorite().insert_favorite_character(leia.id, han.id).await?;
    let second = test.favorite().insert_favorite_character(luke.id, han.id).await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let result = favorite_repo.get_many_by_user_id(luke.id).await.unwrap();

    assert_eq!(result, vec![(first, Some(yoda)), (second, Some(han))]);

    Ok(())
}

/// Expect an empty list when the user has no favorites
#[tokio::test]
async fn returns_empty_for_user_without_favorites() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("luke").await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let result = favorite_repo.get_many_by_user_id(user.id).await;

    assert!(matches!(result, Ok(ref favorites) if favorites.is_empty()));

    Ok(())
}
