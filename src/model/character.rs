//! Character inputs and the serialized character.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::CharacterModel;

/// Input for adding a character to the catalog.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct NewCharacter {
    /// Character name, at most 100 characters.
    #[validate(required, length(max = 100))]
    pub name: Option<String>,
    /// Height as written in the source material, at most 10 characters.
    #[validate(length(max = 10))]
    pub height: Option<String>,
    /// Mass as written in the source material, at most 10 characters.
    #[validate(length(max = 10))]
    pub mass: Option<String>,
    /// Hair color, at most 50 characters.
    #[validate(length(max = 50))]
    pub hair_color: Option<String>,
    /// Skin color, at most 50 characters.
    #[validate(length(max = 50))]
    pub skin_color: Option<String>,
    /// Eye color, at most 50 characters.
    #[validate(length(max = 50))]
    pub eye_color: Option<String>,
    /// Birth year in the galactic calendar, such as `19BBY`.
    #[validate(length(max = 20))]
    pub birth_year: Option<String>,
    /// Gender, at most 20 characters.
    #[validate(length(max = 20))]
    pub gender: Option<String>,
    /// Must reference an existing planet when set.
    pub homeworld_id: Option<i32>,
    /// Free-form description.
    pub description: Option<String>,
}

/// Explicit field updates for a character.
///
/// The outer `Option` selects whether a column is touched; for nullable columns the inner
/// `Option` is the new value, so `Some(None)` clears it.
#[derive(Clone, Debug, Default, Validate)]
pub struct UpdateCharacter {
    /// Character name, at most 100 characters.
    #[validate(length(max = 100))]
    pub name: Option<String>,
    /// Height as written in the source material, at most 10 characters.
    #[validate(length(max = 10))]
    pub height: Option<Option<String>>,
    /// Mass as written in the source material, at most 10 characters.
    #[validate(length(max = 10))]
    pub mass: Option<Option<String>>,
    /// Hair color, at most 50 characters.
    #[validate(length(max = 50))]
    pub hair_color: Option<Option<String>>,
    /// Skin color, at most 50 characters.
    #[validate(length(max = 50))]
    pub skin_color: Option<Option<String>>,
    /// Eye color, at most 50 characters.
    #[validate(length(max = 50))]
    pub eye_color: Option<Option<String>>,
    /// Birth year in the galactic calendar, such as `19BBY`.
    #[validate(length(max = 20))]
    pub birth_year: Option<Option<String>>,
    /// Gender, at most 20 characters.
    #[validate(length(max = 20))]
    pub gender: Option<Option<String>>,
    /// Id of the planet the character comes from.
    pub homeworld_id: Option<Option<i32>>,
    /// Free-form description.
    pub description: Option<Option<String>>,
}

/// Serialized character. `homeworld_id` is the raw foreign key, not the expanded planet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    /// Primary key.
    pub id: i32,
    /// Character name, at most 100 characters.
    pub name: String,
    /// Height as written in the source material, at most 10 characters.
    pub height: Option<String>,
    /// Mass as written in the source material, at most 10 characters.
    pub mass: Option<String>,
    /// Hair color, at most 50 characters.
    pub hair_color: Option<String>,
    /// Skin color, at most 50 characters.
    pub skin_color: Option<String>,
    /// Eye color, at most 50 characters.
    pub eye_color: Option<String>,
    /// Birth year in the galactic calendar, such as `19BBY`.
    pub birth_year: Option<String>,
    /// Gender, at most 20 characters.
    pub gender: Option<String>,
    /// Id of the planet the character comes from.
    pub homeworld_id: Option<i32>,
    /// Free-form description.
    pub description: Option<String>,
}

impl From<CharacterModel> for CharacterDto {
    fn from(character: CharacterModel) -> Self {
        Self {
            id: character.id,
            name: character.name,
            height: character.height,
            mass: character.mass,
            hair_color: character.hair_color,
            skin_color: character.skin_color,
            eye_color: character.eye_color,
            birth_year: character.birth_year,
            gender: character.gender,
            homeworld_id: character.homeworld_id,
            description: character.description,
        }
    }
}
