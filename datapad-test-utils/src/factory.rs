//! Factory functions for generating mock catalog database models.
//!
//! These are in-memory model instances that don't require database interaction, suitable
//! for unit tests of the serialized mappings.

use chrono::Utc;

/// Create a mock user database model.
///
/// The email is derived from the username and the stored password is `hashed-password`.
pub fn mock_user_model(id: i32, username: &str) -> entity::user::Model {
    entity::user::Model {
        id,
        email: format!("{}@example.com", username),
        password: "hashed-password".to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        username: username.to_string(),
        subscription_date: Utc::now().naive_utc(),
        is_active: true,
    }
}

/// Create a mock character database model with only its name and homeworld set.
pub fn mock_character_model(
    id: i32,
    name: &str,
    homeworld_id: Option<i32>,
) -> entity::character::Model {
    entity::character::Model {
        id,
        name: name.to_string(),
        height: None,
        mass: None,
        hair_color: None,
        skin_color: None,
        eye_color: None,
        birth_year: None,
        gender: None,
        homeworld_id,
        description: None,
    }
}

/// Create a mock planet database model with only its name set.
pub fn mock_planet_model(id: i32, name: &str) -> entity::planet::Model {
    entity::planet::Model {
        id,
        name: name.to_string(),
        rotation_period: None,
        orbital_period: None,
        diameter: None,
        climate: None,
        gravity: None,
        terrain: None,
        surface_water: None,
        population: None,
        description: None,
    }
}

pub fn mock_favorite_character_model(
    id: i32,
    user_id: i32,
    character_id: i32,
) -> entity::favorite_character::Model {
    entity::favorite_character::Model {
        id,
        user_id,
        character_id,
        date_added: Utc::now().naive_utc(),
    }
}

pub fn mock_favorite_planet_model(
    id: i32,
    user_id: i32,
    planet_id: i32,
) -> entity::favorite_planet::Model {
    entity::favorite_planet::Model {
        id,
        user_id,
        planet_id,
        date_added: Utc::now().naive_utc(),
    }
}
