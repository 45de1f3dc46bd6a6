//! Favorite character repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::Error,
    model::{CharacterModel, FavoriteCharacterModel},
    util::time,
};

const ENTITY: &str = "favorite_character";

/// Links between users and the characters they favorited.
pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks a character as a favorite of a user
    ///
    /// Both the user and the character must exist, otherwise
    /// [`Error::ReferentialIntegrityViolation`] names the missing side. Favoriting the same
    /// character twice fails with [`Error::UniqueConstraintViolation`].
    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, Error> {
        if entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Err(Error::ReferentialIntegrityViolation {
                entity: ENTITY,
                field: "user_id".to_string(),
                id: Some(user_id),
            });
        }

        if entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Err(Error::ReferentialIntegrityViolation {
                entity: ENTITY,
                field: "character_id".to_string(),
                id: Some(character_id),
            });
        }

        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            date_added: ActiveValue::Set(time::now()),
            ..Default::default()
        };

        let favorite = favorite
            .insert(self.db)
            .await
            .map_err(|e| Error::from_db(ENTITY, e))?;

        tracing::debug!(
            favorite_id = favorite.id,
            user_id,
            character_id,
            "Added favorite character"
        );

        Ok(favorite)
    }

    /// Gets a favorite without its character
    pub async fn get_by_id(&self, id: i32) -> Result<Option<FavoriteCharacterModel>, Error> {
        Ok(entity::prelude::FavoriteCharacter::find_by_id(id)
            .one(self.db)
            .await?)
    }

    /// Gets a favorite along with the character it points to
    pub async fn get_with_character(
        &self,
        id: i32,
    ) -> Result<Option<(FavoriteCharacterModel, Option<CharacterModel>)>, Error> {
        Ok(entity::prelude::FavoriteCharacter::find_by_id(id)
            .find_also_related(entity::character::Entity)
            .one(self.db)
            .await?)
    }

    /// Gets every favorite character of a user with its character, ordered by favorite id
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<(FavoriteCharacterModel, Option<CharacterModel>)>, Error> {
        Ok(entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .find_also_related(entity::character::Entity)
            .all(self.db)
            .await?)
    }

    /// Gets every favorite referencing a character, ordered by favorite id
    pub async fn get_many_by_character_id(
        &self,
        character_id: i32,
    ) -> Result<Vec<FavoriteCharacterModel>, Error> {
        Ok(entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .all(self.db)
            .await?)
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, Error> {
        Ok(entity::prelude::FavoriteCharacter::delete_by_id(id)
            .exec(self.db)
            .await?)
    }
}
