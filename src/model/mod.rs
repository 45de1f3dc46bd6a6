//! Catalog input and transport models.
//!
//! Each entity has a `New*` input validated before insert, an `Update*` input for explicit
//! field updates, and a `*Dto` which is the serialized mapping handed to the serving layer.
//! DTOs keep every field, serializing absent values as `null`, because consumers rely on the
//! exact field set.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

/// Type alias for the user database model.
pub type UserModel = entity::user::Model;

/// Type alias for the character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for the planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the favorite character database model.
pub type FavoriteCharacterModel = entity::favorite_character::Model;

/// Type alias for the favorite planet database model.
pub type FavoritePlanetModel = entity::favorite_planet::Model;
