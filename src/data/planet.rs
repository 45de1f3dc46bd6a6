//! Planet repository.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, QueryFilter, TransactionSession, TransactionTrait, Value,
};
use validator::Validate;

use crate::{
    data::require,
    error::Error,
    model::{
        planet::{NewPlanet, UpdatePlanet},
        PlanetModel,
    },
};

const ENTITY: &str = "planet";

/// Rows touched by [`PlanetRepository::delete`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanetDeletion {
    /// Whether the planet row existed.
    pub planet_deleted: bool,
    /// Favorite planet rows removed.
    pub favorites_deleted: u64,
    /// Residents whose `homeworld_id` was cleared.
    pub residents_detached: u64,
}

/// Validated reads and writes of catalog planets.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a planet to the catalog
    pub async fn create(&self, new_planet: NewPlanet) -> Result<PlanetModel, Error> {
        new_planet
            .validate()
            .map_err(|e| Error::from_validation(ENTITY, e))?;

        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(require(ENTITY, "name", new_planet.name)?),
            rotation_period: ActiveValue::Set(new_planet.rotation_period),
            orbital_period: ActiveValue::Set(new_planet.orbital_period),
            diameter: ActiveValue::Set(new_planet.diameter),
            climate: ActiveValue::Set(new_planet.climate),
            gravity: ActiveValue::Set(new_planet.gravity),
            terrain: ActiveValue::Set(new_planet.terrain),
            surface_water: ActiveValue::Set(new_planet.surface_water),
            population: ActiveValue::Set(new_planet.population),
            description: ActiveValue::Set(new_planet.description),
            ..Default::default()
        };

        let planet = planet
            .insert(self.db)
            .await
            .map_err(|e| Error::from_db(ENTITY, e))?;

        tracing::debug!(planet_id = planet.id, name = %planet.name, "Created planet");

        Ok(planet)
    }

    /// Gets a planet by id
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, Error> {
        Ok(entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?)
    }

    /// Applies explicit field updates to a planet
    ///
    /// Returns `Ok(None)` if the planet does not exist.
    pub async fn update(
        &self,
        planet_id: i32,
        changes: UpdatePlanet,
    ) -> Result<Option<PlanetModel>, Error> {
        changes
            .validate()
            .map_err(|e| Error::from_validation(ENTITY, e))?;

        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.clone().into_active_model();
        if let Some(name) = changes.name {
            planet_am.name = ActiveValue::Set(name);
        }
        if let Some(rotation_period) = changes.rotation_period {
            planet_am.rotation_period = ActiveValue::Set(rotation_period);
        }
        if let Some(orbital_period) = changes.orbital_period {
            planet_am.orbital_period = ActiveValue::Set(orbital_period);
        }
        if let Some(diameter) = changes.diameter {
            planet_am.diameter = ActiveValue::Set(diameter);
        }
        if let Some(climate) = changes.climate {
            planet_am.climate = ActiveValue::Set(climate);
        }
        if let Some(gravity) = changes.gravity {
            planet_am.gravity = ActiveValue::Set(gravity);
        }
        if let Some(terrain) = changes.terrain {
            planet_am.terrain = ActiveValue::Set(terrain);
        }
        if let Some(surface_water) = changes.surface_water {
            planet_am.surface_water = ActiveValue::Set(surface_water);
        }
        if let Some(population) = changes.population {
            planet_am.population = ActiveValue::Set(population);
        }
        if let Some(description) = changes.description {
            planet_am.description = ActiveValue::Set(description);
        }

        if !planet_am.is_changed() {
            return Ok(Some(planet));
        }

        let planet = planet_am
            .update(self.db)
            .await
            .map_err(|e| Error::from_db(ENTITY, e))?;

        Ok(Some(planet))
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> PlanetRepository<'a, C> {
    /// Deletes a planet along with its favorites
    ///
    /// Characters living on the planet are kept with their `homeworld_id` cleared. Returns OK
    /// regardless of planet existing, check [`PlanetDeletion::planet_deleted`] to confirm.
    pub async fn delete(&self, planet_id: i32) -> Result<PlanetDeletion, Error> {
        let txn = self.db.begin().await?;

        let favorites = entity::prelude::FavoritePlanet::delete_many()
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .exec(&txn)
            .await?;
        let residents = entity::prelude::Character::update_many()
            .col_expr(
                entity::character::Column::HomeworldId,
                Expr::value(Value::Int(None)),
            )
            .filter(entity::character::Column::HomeworldId.eq(planet_id))
            .exec(&txn)
            .await?;
        let planet = entity::prelude::Planet::delete_by_id(planet_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        let deletion = PlanetDeletion {
            planet_deleted: planet.rows_affected > 0,
            favorites_deleted: favorites.rows_affected,
            residents_detached: residents.rows_affected,
        };

        tracing::debug!(planet_id, ?deletion, "Deleted planet");

        Ok(deletion)
    }
}
