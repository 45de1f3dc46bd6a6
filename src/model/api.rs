//! OpenAPI schema components for the catalog mappings.

use utoipa::OpenApi;

use crate::model::{
    character::CharacterDto,
    favorite::{FavoriteCharacterDto, FavoritePlanetDto, UserFavoritesDto},
    planet::PlanetDto,
    user::UserDto,
};

/// Schema components for the catalog mappings, to be merged into the serving layer's
/// API document.
#[derive(OpenApi)]
#[openapi(components(schemas(
    UserDto,
    CharacterDto,
    PlanetDto,
    FavoriteCharacterDto,
    FavoritePlanetDto,
    UserFavoritesDto
)))]
pub struct CatalogApiDoc;
