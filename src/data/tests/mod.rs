mod favorite_character;
mod favorite_planet;

use datapad_test_utils::prelude::*;
