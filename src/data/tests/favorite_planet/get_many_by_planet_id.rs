use super::*;

/// Expect every favorite of the planet
#[tokio::test]
async fn returns_favorites_of_planet() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let luke = test.user().insert_user("luke").await?;
    let leia = test.user().insert_user("leia").await?;
    let hoth = test.catalog().insert_planet("Hoth").await?;
    let by_luke = test.favorite().insert_favorite_planet(luke.id, hoth.id).await?;
    let by_leia = test.favorite().insert_favorite_planet(leia.id, hoth.id).await?;

    let favorite_repo = FavoritePlanetRepository::new(&test.db);
    let result = favorite_repo.get_many_by_planet_id(hoth.id).await.unwrap();

    assert_eq!(result, vec![by_luke, by_leia]);

    Ok(())
}

/// Expect an empty list for a planet nobody favorited
#[tokio::test]
async fn returns_empty_for_unfavorited_planet() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let hoth = test.catalog().insert_planet("Hoth").await?;

    let favorite_repo = FavoritePlanetRepository::new(&test.db);
    let result = favorite_repo.get_many_by_planet_id(hoth.id).await;

    assert!(matches!(result, Ok(ref favorites) if favorites.is_empty()));

    Ok(())
}
