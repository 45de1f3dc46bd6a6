use super::*;

/// Expect the favorite to be removed
#[tokio::test]
async fn deletes_favorite() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("luke").await?;
    let planet = test.catalog().insert_planet("Dagobah").await?;
    let favorite = test
        .favorite()
        .insert_favorite_planet(user.id, planet.id)
        .await?;

    let favorite_repo = FavoritePlanetRepository::new(&test.db);
    let result = favorite_repo.delete(favorite.id).await;

    assert_eq!(result.unwrap().rows_affected, 1);
    assert!(matches!(favorite_repo.get_by_id(favorite.id).await, Ok(None)));

    Ok(())
}
