//! sea-orm entities for the catalog schema.
//!
//! Column declarations mirror the tables installed by the `migration` crate.

pub mod prelude;

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod planet;
pub mod user;
