//! Favorite planet repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::Error,
    model::{FavoritePlanetModel, PlanetModel},
    util::time,
};

const ENTITY: &str = "favorite_planet";

/// Links between users and the planets they favorited.
pub struct FavoritePlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a planet as a favorite of a user
    ///
    /// Both the user and the planet must exist, otherwise
    /// [`Error::ReferentialIntegrityViolation`] names the missing side. Favoriting the same
    /// planet twice fails with [`Error::UniqueConstraintViolation`].
    pub async fn create(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, Error> {
        if entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Err(Error::ReferentialIntegrityViolation {
                entity: ENTITY,
                field: "user_id".to_string(),
                id: Some(user_id),
            });
        }

        if entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Err(Error::ReferentialIntegrityViolation {
                entity: ENTITY,
                field: "planet_id".to_string(),
                id: Some(planet_id),
            });
        }

        let favorite = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            date_added: ActiveValue::Set(time::now()),
            ..Default::default()
        };

        let favorite = favorite
            .insert(self.db)
            .await
            .map_err(|e| Error::from_db(ENTITY, e))?;

        tracing::debug!(
            favorite_id = favorite.id,
            user_id,
            planet_id,
            "Added favorite planet"
        );

        Ok(favorite)
    }

    /// Gets a favorite without its planet
    pub async fn get_by_id(&self, id: i32) -> Result<Option<FavoritePlanetModel>, Error> {
        Ok(entity::prelude::FavoritePlanet::find_by_id(id)
            .one(self.db)
            .await?)
    }

    /// Gets a favorite along with the planet it points to
    pub async fn get_with_planet(
        &self,
        id: i32,
    ) -> Result<Option<(FavoritePlanetModel, Option<PlanetModel>)>, Error> {
        Ok(entity::prelude::FavoritePlanet::find_by_id(id)
            .find_also_related(entity::planet::Entity)
            .one(self.db)
            .await?)
    }

    /// Gets every favorite planet of a user with its planet, ordered by favorite id
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(FavoritePlanetModel, Option<PlanetModel>)>, Error> {
        Ok(entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_planet::Column::Id)
            .find_also_related(entity::planet::Entity)
            .all(self.db)
            .await?)
    }

    /// Gets every favorite referencing a planet, ordered by favorite id
    pub async fn get_many_by_planet_id(
        &self,
        planet_id: i32,
    ) -> Result<Vec<FavoritePlanetModel>, Error> {
        Ok(entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .order_by_asc(entity::favorite_planet::Column::Id)
            .all(self.db)
            .await?)
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, Error> {
        Ok(entity::prelude::FavoritePlanet::delete_by_id(id)
            .exec(self.db)
            .await?)
    }
}
