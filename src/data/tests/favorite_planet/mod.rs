mod create;
mod delete;
mod get_many_by_planet_id;
mod get_many_by_user_id;

use super::*;

use crate::{data::favorite_planet::FavoritePlanetRepository, error::Error};
