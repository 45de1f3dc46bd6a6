use super::*;

/// Expect every user's favorite of the character
#[tokio::test]
async fn returns_favorites_of_character() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let luke = test.user().insert_user("luke").await?;
    let leia = test.user().insert_user("leia").await?;
    let han = test.catalog().insert_character("Han Solo", None).await?;
    let chewie = test.catalog().insert_character("Chewbacca", None).await?;
    let by_luke = test.favorite().insert_favorite_character(luke.id, han.id).await?;
    let by_leia = test.favorite().insert_favorite_character(leia.id, han.id).await?;
    test.favorite().insert_favorite_character(leia.id, chewie.id).await?;

    let favorite_repo = FavoriteCharacterRepository::new(&test.db);
    let result = favorite_repo.get_many_by_character_id(han.id).await.unwrap();

    assert_eq!(result, vec![by_luke, by_leia]);

    Ok(())
}
