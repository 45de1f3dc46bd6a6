use super::*;

/// Expect success when favoriting an existing planet
#[tokio::test]
async fn creates_favorite_planet() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("luke").await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;

    let favorite_repo = FavoritePlanetRepository::new(&test.db);
    let result = favorite_repo.create(user.id, planet.id).await;

    assert!(matches!(result, Ok(ref f) if f.user_id == user.id && f.planet_id == planet.id));

    Ok(())
}

/// Expect UniqueConstraintViolation naming both columns when favoriting twice
#[tokio::test]
async fn fails_for_duplicate_favorite() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("luke").await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;

    let favorite_repo = FavoritePlanetRepository::new(&test.db);
    favorite_repo.create(user.id, planet.id).await.unwrap();
    let result = favorite_repo.create(user.id, planet.id).await;

    assert!(matches!(
        result,
        Err(Error::UniqueConstraintViolation { entity: "favorite_planet", ref fields })
            if fields == "user_id, planet_id"
    ));

    Ok(())
}

/// Expect ReferentialIntegrityViolation on planet_id when the planet does not exist
#[tokio::test]
async fn fails_for_nonexistent_planet() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test.user().insert_user("luke").await?;

    let favorite_repo = FavoritePlanetRepository::new(&test.db);
    let result = favorite_repo.create(user.id, 7).await;

    assert!(matches!(
        result,
        Err(Error::ReferentialIntegrityViolation { entity: "favorite_planet", ref field, id: Some(7) })
            if field == "planet_id"
    ));

    Ok(())
}

/// Expect ReferentialIntegrityViolation on user_id when the user does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let planet = test.catalog().insert_planet("Tatooine").await?;

    let favorite_repo = FavoritePlanetRepository::new(&test.db);
    let result = favorite_repo.create(3, planet.id).await;

    assert!(matches!(
        result,
        Err(Error::ReferentialIntegrityViolation { ref field, .. }) if field == "user_id"
    ));

    Ok(())
}
