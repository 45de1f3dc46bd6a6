//! User account repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    QueryFilter, TransactionSession, TransactionTrait,
};
use validator::Validate;

use crate::{
    data::require,
    error::Error,
    model::{
        user::{NewUser, UpdateUser},
        UserModel,
    },
    util::time,
};

const ENTITY: &str = "user";

/// Rows removed by [`UserRepository::delete`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserDeletion {
    /// Whether the user row existed.
    pub user_deleted: bool,
    /// Favorite character rows removed.
    pub favorite_characters_deleted: u64,
    /// Favorite planet rows removed.
    pub favorite_planets_deleted: u64,
}

/// Validated reads and writes of user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a new user
    ///
    /// `subscription_date` is captured now and `is_active` defaults to `true`. Duplicate email
    /// or username surfaces as [`Error::UniqueConstraintViolation`].
    pub async fn create(&self, new_user: NewUser) -> Result<UserModel, Error> {
        new_user
            .validate()
            .map_err(|e| Error::from_validation(ENTITY, e))?;

        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(require(ENTITY, "email", new_user.email)?),
            password: ActiveValue::Set(require(ENTITY, "password", new_user.password)?),
            first_name: ActiveValue::Set(require(ENTITY, "first_name", new_user.first_name)?),
            last_name: ActiveValue::Set(require(ENTITY, "last_name", new_user.last_name)?),
            username: ActiveValue::Set(require(ENTITY, "username", new_user.username)?),
            subscription_date: ActiveValue::Set(time::now()),
            is_active: ActiveValue::Set(new_user.is_active.unwrap_or(true)),
            ..Default::default()
        };

        let user = user
            .insert(self.db)
            .await
            .map_err(|e| Error::from_db(ENTITY, e))?;

        tracing::debug!(user_id = user.id, username = %user.username, "Created user");

        Ok(user)
    }

    /// Gets a user by id
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        Ok(entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?)
    }

    /// Gets a user by exact email
    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserModel>, Error> {
        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?)
    }

    /// Gets a user by exact username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserModel>, Error> {
        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?)
    }

    /// Applies explicit field updates to a user
    ///
    /// Returns `Ok(None)` if the user does not exist.
    pub async fn update(
        &self,
        user_id: i32,
        changes: UpdateUser,
    ) -> Result<Option<UserModel>, Error> {
        changes
            .validate()
            .map_err(|e| Error::from_validation(ENTITY, e))?;

        let user = match entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.clone().into_active_model();
        if let Some(email) = changes.email {
            user_am.email = ActiveValue::Set(email);
        }
        if let Some(password) = changes.password {
            user_am.password = ActiveValue::Set(password);
        }
        if let Some(first_name) = changes.first_name {
            user_am.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            user_am.last_name = ActiveValue::Set(last_name);
        }
        if let Some(username) = changes.username {
            user_am.username = ActiveValue::Set(username);
        }
        if let Some(is_active) = changes.is_active {
            user_am.is_active = ActiveValue::Set(is_active);
        }

        if !user_am.is_changed() {
            return Ok(Some(user));
        }

        let user = user_am
            .update(self.db)
            .await
            .map_err(|e| Error::from_db(ENTITY, e))?;

        Ok(Some(user))
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> UserRepository<'a, C> {
    /// Deletes a user along with all of its favorites
    ///
    /// Returns OK regardless of user existing, check [`UserDeletion::user_deleted`] to confirm.
    pub async fn delete(&self, user_id: i32) -> Result<UserDeletion, Error> {
        let txn = self.db.begin().await?;

        let favorite_characters = entity::prelude::FavoriteCharacter::delete_many()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        let favorite_planets = entity::prelude::FavoritePlanet::delete_many()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;
        let user = entity::prelude::User::delete_by_id(user_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        let deletion = UserDeletion {
            user_deleted: user.rows_affected > 0,
            favorite_characters_deleted: favorite_characters.rows_affected,
            favorite_planets_deleted: favorite_planets.rows_affected,
        };

        tracing::debug!(user_id, ?deletion, "Deleted user");

        Ok(deletion)
    }
}
