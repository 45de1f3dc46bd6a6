//! User registration inputs and the serialized user.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{model::UserModel, util::time::to_iso8601};

/// Input for registering a user.
///
/// Required fields are `Option` so a payload missing one deserializes and is then rejected
/// with `RequiredFieldMissing` instead of a serde error.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct NewUser {
    /// Login email, unique, at most 120 characters.
    #[validate(required, length(max = 120))]
    pub email: Option<String>,
    /// Password, stored as given.
    #[validate(required)]
    pub password: Option<String>,
    /// Given name, at most 50 characters.
    #[validate(required, length(max = 50))]
    pub first_name: Option<String>,
    /// Family name, at most 50 characters.
    #[validate(required, length(max = 50))]
    pub last_name: Option<String>,
    /// Unique handle, at most 50 characters.
    #[validate(required, length(max = 50))]
    pub username: Option<String>,
    /// Defaults to `true` when absent.
    pub is_active: Option<bool>,
}

/// Explicit field updates for a user, `None` leaves the column unchanged.
///
/// `subscription_date` is captured at insert and cannot be updated.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct UpdateUser {
    /// Login email, unique, at most 120 characters.
    #[validate(length(max = 120))]
    pub email: Option<String>,
    /// Password, stored as given.
    pub password: Option<String>,
    /// Given name, at most 50 characters.
    #[validate(length(max = 50))]
    pub first_name: Option<String>,
    /// Family name, at most 50 characters.
    #[validate(length(max = 50))]
    pub last_name: Option<String>,
    /// Unique handle, at most 50 characters.
    #[validate(length(max = 50))]
    pub username: Option<String>,
    /// Whether the account is active.
    pub is_active: Option<bool>,
}

/// Serialized user. The stored password is never part of this mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    /// Primary key.
    pub id: i32,
    /// Login email, unique, at most 120 characters.
    pub email: String,
    /// Given name, at most 50 characters.
    pub first_name: String,
    /// Family name, at most 50 characters.
    pub last_name: String,
    /// Unique handle, at most 50 characters.
    pub username: String,
    /// ISO-8601 timestamp
    pub subscription_date: Option<String>,
    /// Whether the account is active.
    pub is_active: bool,
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            subscription_date: Some(to_iso8601(&user.subscription_date)),
            is_active: user.is_active,
        }
    }
}
