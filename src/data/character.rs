//! Character repository.
//!
//! A character's homeworld is optional; when set it must reference an existing planet.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, TransactionSession, TransactionTrait,
};
use validator::Validate;

use crate::{
    data::require,
    error::Error,
    model::{
        character::{NewCharacter, UpdateCharacter},
        CharacterModel,
    },
};

const ENTITY: &str = "character";

/// Rows removed by [`CharacterRepository::delete`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharacterDeletion {
    /// Whether the character row existed.
    pub character_deleted: bool,
    /// Favorite character rows removed.
    pub favorites_deleted: u64,
}

/// Validated reads and writes of catalog characters.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a character to the catalog
    ///
    /// When `homeworld_id` is set the planet must exist, otherwise
    /// [`Error::ReferentialIntegrityViolation`] is returned.
    pub async fn create(&self, new_character: NewCharacter) -> Result<CharacterModel, Error> {
        new_character
            .validate()
            .map_err(|e| Error::from_validation(ENTITY, e))?;

        if let Some(homeworld_id) = new_character.homeworld_id {
            self.ensure_planet_exists(homeworld_id).await?;
        }

        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(require(ENTITY, "name", new_character.name)?),
            height: ActiveValue::Set(new_character.height),
            mass: ActiveValue::Set(new_character.mass),
            hair_color: ActiveValue::Set(new_character.hair_color),
            skin_color: ActiveValue::Set(new_character.skin_color),
            eye_color: ActiveValue::Set(new_character.eye_color),
            birth_year: ActiveValue::Set(new_character.birth_year),
            gender: ActiveValue::Set(new_character.gender),
            homeworld_id: ActiveValue::Set(new_character.homeworld_id),
            description: ActiveValue::Set(new_character.description),
            ..Default::default()
        };

        let character = character
            .insert(self.db)
            .await
            .map_err(|e| Error::from_db(ENTITY, e))?;

        tracing::debug!(character_id = character.id, name = %character.name, "Created character");

        Ok(character)
    }

    /// Gets a character by id
    pub async fn get_by_id(&self, character_id: i32) -> Result<Option<CharacterModel>, Error> {
        Ok(entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?)
    }

    /// Gets all characters whose homeworld is the provided planet, ordered by id
    pub async fn get_residents(&self, planet_id: i32) -> Result<Vec<CharacterModel>, Error> {
        Ok(entity::prelude::Character::find()
            .filter(entity::character::Column::HomeworldId.eq(planet_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?)
    }

    /// Applies explicit field updates to a character
    ///
    /// Returns `Ok(None)` if the character does not exist.
    pub async fn update(
        &self,
        character_id: i32,
        changes: UpdateCharacter,
    ) -> Result<Option<CharacterModel>, Error> {
        changes
            .validate()
            .map_err(|e| Error::from_validation(ENTITY, e))?;

        let character = match entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        if let Some(Some(homeworld_id)) = changes.homeworld_id {
            self.ensure_planet_exists(homeworld_id).await?;
        }

        let mut character_am = character.clone().into_active_model();
        if let Some(name) = changes.name {
            character_am.name = ActiveValue::Set(name);
        }
        if let Some(height) = changes.height {
            character_am.height = ActiveValue::Set(height);
        }
        if let Some(mass) = changes.mass {
            character_am.mass = ActiveValue::Set(mass);
        }
        if let Some(hair_color) = changes.hair_color {
            character_am.hair_color = ActiveValue::Set(hair_color);
        }
        if let Some(skin_color) = changes.skin_color {
            character_am.skin_color = ActiveValue::Set(skin_color);
        }
        if let Some(eye_color) = changes.eye_color {
            character_am.eye_color = ActiveValue::Set(eye_color);
        }
        if let Some(birth_year) = changes.birth_year {
            character_am.birth_year = ActiveValue::Set(birth_year);
        }
        if let Some(gender) = changes.gender {
            character_am.gender = ActiveValue::Set(gender);
        }
        if let Some(homeworld_id) = changes.homeworld_id {
            character_am.homeworld_id = ActiveValue::Set(homeworld_id);
        }
        if let Some(description) = changes.description {
            character_am.description = ActiveValue::Set(description);
        }

        if !character_am.is_changed() {
            return Ok(Some(character));
        }

        let character = character_am
            .update(self.db)
            .await
            .map_err(|e| Error::from_db(ENTITY, e))?;

        Ok(Some(character))
    }

    async fn ensure_planet_exists(&self, planet_id: i32) -> Result<(), Error> {
        let planet = entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?;

        if planet.is_none() {
            return Err(Error::ReferentialIntegrityViolation {
                entity: ENTITY,
                field: "homeworld_id".to_string(),
                id: Some(planet_id),
            });
        }

        Ok(())
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> CharacterRepository<'a, C> {
    /// Deletes a character along with every favorite referencing it
    ///
    /// Returns OK regardless of character existing, check
    /// [`CharacterDeletion::character_deleted`] to confirm.
    pub async fn delete(&self, character_id: i32) -> Result<CharacterDeletion, Error> {
        let txn = self.db.begin().await?;

        let favorites = entity::prelude::FavoriteCharacter::delete_many()
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .exec(&txn)
            .await?;
        let character = entity::prelude::Character::delete_by_id(character_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        let deletion = CharacterDeletion {
            character_deleted: character.rows_affected > 0,
            favorites_deleted: favorites.rows_affected,
        };

        tracing::debug!(character_id, ?deletion, "Deleted character");

        Ok(deletion)
    }
}
