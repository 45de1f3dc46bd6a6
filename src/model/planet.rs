//! Planet inputs and the serialized planet.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::PlanetModel;

/// Input for adding a planet to the catalog.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct NewPlanet {
    /// Planet name, at most 100 characters.
    #[validate(required, length(max = 100))]
    pub name: Option<String>,
    /// Length of a day in standard hours.
    #[validate(length(max = 20))]
    pub rotation_period: Option<String>,
    /// Length of a year in standard days.
    #[validate(length(max = 20))]
    pub orbital_period: Option<String>,
    /// Diameter in kilometers.
    #[validate(length(max = 20))]
    pub diameter: Option<String>,
    /// Climate, at most 100 characters.
    #[validate(length(max = 100))]
    pub climate: Option<String>,
    /// Gravity relative to standard, at most 50 characters.
    #[validate(length(max = 50))]
    pub gravity: Option<String>,
    /// Terrain, at most 100 characters.
    #[validate(length(max = 100))]
    pub terrain: Option<String>,
    /// Percentage of the surface covered by water.
    #[validate(length(max = 20))]
    pub surface_water: Option<String>,
    /// Population as written in the source material.
    #[validate(length(max = 20))]
    pub population: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

/// Explicit field updates for a planet, see [`UpdateCharacter`](super::character::UpdateCharacter)
/// for the meaning of the nested options.
#[derive(Clone, Debug, Default, Validate)]
pub struct UpdatePlanet {
    /// Planet name, at most 100 characters.
    #[validate(length(max = 100))]
    pub name: Option<String>,
    /// Length of a day in standard hours.
    #[validate(length(max = 20))]
    pub rotation_period: Option<Option<String>>,
    /// Length of a year in standard days.
    #[validate(length(max = 20))]
    pub orbital_period: Option<Option<String>>,
    /// Diameter in kilometers.
    #[validate(length(max = 20))]
    pub diameter: Option<Option<String>>,
    /// Climate, at most 100 characters.
    #[validate(length(max = 100))]
    pub climate: Option<Option<String>>,
    /// Gravity relative to standard, at most 50 characters.
    #[validate(length(max = 50))]
    pub gravity: Option<Option<String>>,
    /// Terrain, at most 100 characters.
    #[validate(length(max = 100))]
    pub terrain: Option<Option<String>>,
    /// Percentage of the surface covered by water.
    #[validate(length(max = 20))]
    pub surface_water: Option<Option<String>>,
    /// Population as written in the source material.
    #[validate(length(max = 20))]
    pub population: Option<Option<String>>,
    /// Free-form description.
    pub description: Option<Option<String>>,
}

/// Serialized planet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    /// Primary key.
    pub id: i32,
    /// Planet name, at most 100 characters.
    pub name: String,
    /// Length of a day in standard hours.
    pub rotation_period: Option<String>,
    /// Length of a year in standard days.
    pub orbital_period: Option<String>,
    /// Diameter in kilometers.
    pub diameter: Option<String>,
    /// Climate, at most 100 characters.
    pub climate: Option<String>,
    /// Gravity relative to standard, at most 50 characters.
    pub gravity: Option<String>,
    /// Terrain, at most 100 characters.
    pub terrain: Option<String>,
    /// Percentage of the surface covered by water.
    pub surface_water: Option<String>,
    /// Population as written in the source material.
    pub population: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
            diameter: planet.diameter,
            climate: planet.climate,
            gravity: planet.gravity,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
            population: planet.population,
            description: planet.description,
        }
    }
}
