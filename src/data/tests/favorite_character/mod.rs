mod create;
mod delete;
mod get_many_by_character_id;
mod get_many_by_user_id;
mod get_with_character;

use super::*;

use crate::{data::favorite_character::FavoriteCharacterRepository, error::Error};
