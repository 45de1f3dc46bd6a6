//! Serialized favorites with their targets nested.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    model::{
        character::CharacterDto, planet::PlanetDto, user::UserDto, CharacterModel,
        FavoriteCharacterModel, FavoritePlanetModel, PlanetModel,
    },
    util::time::to_iso8601,
};

/// Serialized favorite character with the referenced character nested.
///
/// `character` is `null` when the referenced row no longer exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCharacterDto {
    /// Primary key.
    pub id: i32,
    /// Owning user.
    pub user_id: i32,
    /// Favorited character.
    pub character_id: i32,
    /// ISO-8601 timestamp
    pub date_added: Option<String>,
    /// The favorited character.
    pub character: Option<CharacterDto>,
}

impl From<(FavoriteCharacterModel, Option<CharacterModel>)> for FavoriteCharacterDto {
    fn from((favorite, character): (FavoriteCharacterModel, Option<CharacterModel>)) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            character_id: favorite.character_id,
            date_added: Some(to_iso8601(&favorite.date_added)),
            character: character.map(CharacterDto::from),
        }
    }
}

/// Serialized favorite planet with the referenced planet nested.
///
/// `planet` is `null` when the referenced row no longer exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanetDto {
    /// Primary key.
    pub id: i32,
    /// Owning user.
    pub user_id: i32,
    /// Favorited planet.
    pub planet_id: i32,
    /// ISO-8601 timestamp
    pub date_added: Option<String>,
    /// The favorited planet.
    pub planet: Option<PlanetDto>,
}

impl From<(FavoritePlanetModel, Option<PlanetModel>)> for FavoritePlanetDto {
    fn from((favorite, planet): (FavoritePlanetModel, Option<PlanetModel>)) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
            date_added: Some(to_iso8601(&favorite.date_added)),
            planet: planet.map(PlanetDto::from),
        }
    }
}

/// A user together with every favorite they hold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesDto {
    /// The user holding the favorites.
    pub user: UserDto,
    /// Favorite characters, oldest first.
    pub characters: Vec<FavoriteCharacterDto>,
    /// Favorite planets, oldest first.
    pub planets: Vec<FavoritePlanetDto>,
}
