//! Data access layer repositories.
//!
//! One repository per catalog table. Repositories validate their inputs, translate store
//! failures into [`Error`](crate::error::Error) and run multi-row deletes inside a single
//! transaction so the catalog never observes a partial cascade.

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod planet;
pub mod user;

#[cfg(test)]
mod tests;

use crate::error::Error;

/// Unwraps a field that validation has already required.
pub(crate) fn require<T>(entity: &'static str, field: &str, value: Option<T>) -> Result<T, Error> {
    value.ok_or_else(|| Error::RequiredFieldMissing {
        entity,
        field: field.to_string(),
    })
}
