//! Favorites service.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        character::CharacterRepository, favorite_character::FavoriteCharacterRepository,
        favorite_planet::FavoritePlanetRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::Error,
    model::{
        favorite::{FavoriteCharacterDto, FavoritePlanetDto, UserFavoritesDto},
        user::UserDto,
    },
};

/// Service for managing user favorites.
///
/// Writes go through the favorite repositories, which check that both referenced rows exist
/// before inserting. Reads return favorites with their target expanded.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a character to a user's favorites.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user the favorite belongs to
    /// - `character_id` - ID of the character being favorited
    ///
    /// # Returns
    /// - `Ok(FavoriteCharacterDto)` - Favorite created, with the character expanded
    /// - `Err(Error::ReferentialIntegrityViolation)` - User or character does not exist
    /// - `Err(Error::UniqueConstraintViolation)` - Character is already a favorite of the user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterDto, Error> {
        let favorite = FavoriteCharacterRepository::new(self.db)
            .create(user_id, character_id)
            .await?;
        let character = CharacterRepository::new(self.db)
            .get_by_id(favorite.character_id)
            .await?;

        Ok(FavoriteCharacterDto::from((favorite, character)))
    }

    /// Adds a planet to a user's favorites.
    ///
    /// # Returns
    /// - `Ok(FavoritePlanetDto)` - Favorite created, with the planet expanded
    /// - `Err(Error::ReferentialIntegrityViolation)` - User or planet does not exist
    /// - `Err(Error::UniqueConstraintViolation)` - Planet is already a favorite of the user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetDto, Error> {
        let favorite = FavoritePlanetRepository::new(self.db)
            .create(user_id, planet_id)
            .await?;
        let planet = PlanetRepository::new(self.db)
            .get_by_id(favorite.planet_id)
            .await?;

        Ok(FavoritePlanetDto::from((favorite, planet)))
    }

    /// Retrieves a favorite character with its character expanded.
    pub async fn get_character_favorite(
        &self,
        favorite_id: i32,
    ) -> Result<Option<FavoriteCharacterDto>, Error> {
        let favorite = FavoriteCharacterRepository::new(self.db)
            .get_with_character(favorite_id)
            .await?;

        Ok(favorite.map(FavoriteCharacterDto::from))
    }

    /// Retrieves a favorite planet with its planet expanded.
    pub async fn get_planet_favorite(
        &self,
        favorite_id: i32,
    ) -> Result<Option<FavoritePlanetDto>, Error> {
        let favorite = FavoritePlanetRepository::new(self.db)
            .get_with_planet(favorite_id)
            .await?;

        Ok(favorite.map(FavoritePlanetDto::from))
    }

    /// Retrieves a user together with all of their favorites.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(UserFavoritesDto))` - User found, favorites ordered by when they were added
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(
        &self,
        user_id: i32,
    ) -> Result<Option<UserFavoritesDto>, Error> {
        let Some(user) = UserRepository::new(self.db).get_by_id(user_id).await? else {
            return Ok(None);
        };

        let characters = FavoriteCharacterRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;
        let planets = FavoritePlanetRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(Some(UserFavoritesDto {
            user: UserDto::from(user),
            characters: characters
                .into_iter()
                .map(FavoriteCharacterDto::from)
                .collect(),
            planets: planets.into_iter().map(FavoritePlanetDto::from).collect(),
        }))
    }
}

#[cfg(test)]
mod tests {

    mod add_character {
        use datapad_test_utils::prelude::*;

        use crate::{error::Error, service::favorite::FavoriteService};

        /// Expect the created favorite to carry the expanded character
        #[tokio::test]
        async fn returns_favorite_with_character() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let user = test.user().insert_user("luke").await?;
            let character = test.catalog().insert_character("Yoda", None).await?;

            let favorite_service = FavoriteService::new(&test.db);
            let result = favorite_service.add_character(user.id, character.id).await;

            let favorite = result.unwrap();
            assert_eq!(favorite.user_id, user.id);
            assert_eq!(favorite.character.map(|c| c.name), Some("Yoda".to_string()));
            assert!(favorite.date_added.is_some());

            Ok(())
        }

        /// Expect UniqueConstraintViolation when the character is already a favorite
        #[tokio::test]
        async fn fails_for_duplicate_favorite() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let user = test.user().insert_user("luke").await?;
            let character = test.catalog().insert_character("Yoda", None).await?;

            let favorite_service = FavoriteService::new(&test.db);
            favorite_service
                .add_character(user.id, character.id)
                .await
                .unwrap();
            let result = favorite_service.add_character(user.id, character.id).await;

            assert!(matches!(
                result,
                Err(Error::UniqueConstraintViolation { .. })
            ));

            Ok(())
        }
    }

    mod add_planet {
        use datapad_test_utils::prelude::*;

        use crate::{error::Error, service::favorite::FavoriteService};

        /// Expect the created favorite to carry the expanded planet
        #[tokio::test]
        async fn returns_favorite_with_planet() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let user = test.user().insert_user("luke").await?;
            let planet = test.catalog().insert_planet("Tatooine").await?;

            let favorite_service = FavoriteService::new(&test.db);
            let result = favorite_service.add_planet(user.id, planet.id).await;

            let favorite = result.unwrap();
            assert_eq!(favorite.planet_id, planet.id);
            assert_eq!(favorite.planet.map(|p| p.id), Some(planet.id));

            Ok(())
        }

        /// Expect ReferentialIntegrityViolation when the planet does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_planet() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let user = test.user().insert_user("luke").await?;

            let favorite_service = FavoriteService::new(&test.db);
            let result = favorite_service.add_planet(user.id, 5).await;

            assert!(matches!(
                result,
                Err(Error::ReferentialIntegrityViolation { ref field, .. }) if field == "planet_id"
            ));

            Ok(())
        }
    }

    mod get_favorite {
        use datapad_test_utils::prelude::*;

        use crate::service::favorite::FavoriteService;

        /// Expect both favorite kinds to be retrievable by id
        #[tokio::test]
        async fn returns_existing_favorites() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let user = test.user().insert_user("luke").await?;
            let (planet, character) = test
                .catalog()
                .insert_planet_with_resident("Tatooine", "Luke Skywalker")
                .await?;
            let favorite_character = test
                .favorite()
                .insert_favorite_character(user.id, character.id)
                .await?;
            let favorite_planet = test
                .favorite()
                .insert_favorite_planet(user.id, planet.id)
                .await?;

            let favorite_service = FavoriteService::new(&test.db);

            let character_favorite = favorite_service
                .get_character_favorite(favorite_character.id)
                .await
                .unwrap()
                .unwrap();
            let planet_favorite = favorite_service
                .get_planet_favorite(favorite_planet.id)
                .await
                .unwrap()
                .unwrap();

            assert_eq!(
                character_favorite.character.and_then(|c| c.homeworld_id),
                Some(planet.id)
            );
            assert_eq!(planet_favorite.planet.map(|p| p.name), Some("Tatooine".to_string()));

            Ok(())
        }

        /// Expect None for favorites that do not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_favorite() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let favorite_service = FavoriteService::new(&test.db);

            assert!(matches!(favorite_service.get_character_favorite(1).await, Ok(None)));
            assert!(matches!(favorite_service.get_planet_favorite(1).await, Ok(None)));

            Ok(())
        }
    }

    mod get_user_favorites {
        use datapad_test_utils::prelude::*;

        use crate::service::favorite::FavoriteService;

        /// Expect the user with both favorite lists
        #[tokio::test]
        async fn returns_user_with_favorites() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let user = test.user().insert_user("luke").await?;
            let other = test.user().insert_user("leia").await?;
            let (planet, character) = test
                .catalog()
                .insert_planet_with_resident("Tatooine", "Luke Skywalker")
                .await?;
            test.favorite()
                .insert_favorite_character(user.id, character.id)
                .await?;
            test.favorite()
                .insert_favorite_planet(user.id, planet.id)
                .await?;
            test.favorite()
                .insert_favorite_planet(other.id, planet.id)
                .await?;

            let favorite_service = FavoriteService::new(&test.db);
            let favorites = favorite_service
                .get_user_favorites(user.id)
                .await
                .unwrap()
                .unwrap();

            assert_eq!(favorites.user.username, "luke");
            assert_eq!(favorites.characters.len(), 1);
            assert_eq!(favorites.planets.len(), 1);
            assert_eq!(favorites.planets[0].user_id, user.id);

            Ok(())
        }

        /// Expect empty lists for a user without favorites
        #[tokio::test]
        async fn returns_empty_lists_for_user_without_favorites() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let user = test.user().insert_user("luke").await?;

            let favorite_service = FavoriteService::new(&test.db);
            let favorites = favorite_service
                .get_user_favorites(user.id)
                .await
                .unwrap()
                .unwrap();

            assert!(favorites.characters.is_empty());
            assert!(favorites.planets.is_empty());

            Ok(())
        }

        /// Expect None when the user does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let favorite_service = FavoriteService::new(&test.db);
            let result = favorite_service.get_user_favorites(1).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }
}
