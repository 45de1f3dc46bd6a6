use super::*;

/// Expect only the user's favorite planets, each with its planet
#[tokio::test]
async fn returns_favorites_of_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let luke = test.user().insert_user("luke").await?;
    let leia = test.user().insert_user("leia").await?;
    let tatooine = test.catalog().insert_planet("Tatooine").await?;
    let alderaan = test.catalog().insert_planet("Alderaan").await?;
    let favorite = test
        .favorite()
        .insert_favorite_planet(luke.id, tatooine.id)
        .await?;
    test.favorite()
        .insert_favorite_planet(leia.id, alderaan.id)
        .await?;

    let favorite_repo = FavoritePlanetRepository::new(&test.db);
    let result = favorite_repo.get_many_by_user_id(luke.id).await.unwrap();

    assert_eq!(result, vec![(favorite.clone(), Some(tatooine.clone()))]);
    assert_eq!(
        favorite_repo.get_with_planet(favorite.id).await.unwrap(),
        Some((favorite, Some(tatooine)))
    );

    Ok(())
}
