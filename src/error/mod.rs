//! Error types for the catalog data model.
//!
//! Write failures are classified into a small taxonomy that the serving layer translates into
//! user-facing responses: missing required fields, over-length values, uniqueness violations,
//! and broken foreign-key references. Anything else the store reports is passed through as
//! [`sea_orm::DbErr`]. Nothing here retries or recovers; every error reaches the caller.

pub mod config;
pub mod constraint;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use validator::ValidationErrors;

use crate::error::{config::ConfigError, constraint::ConstraintParser};

/// Main error type for the catalog.
///
/// Store errors are converted with [`Error::from_db`] rather than `#[from]` so constraint
/// violations land in their dedicated variants with the entity they were raised for.
#[derive(Error, Debug)]
pub enum Error {
    /// A required field was absent from the input.
    #[error("Missing required field {field} for {entity}")]
    RequiredFieldMissing {
        /// Table the record was destined for.
        entity: &'static str,
        /// Name of the absent column.
        field: String,
    },
    /// A string value exceeded the declared column length.
    #[error("Value for {entity}.{field} exceeds the maximum length of {max} characters")]
    ValueTooLong {
        /// Table the record was destined for.
        entity: &'static str,
        /// Name of the over-length column.
        field: String,
        /// Declared maximum length.
        max: u64,
    },
    /// A unique column or column pair already holds the submitted value.
    #[error("Unique constraint violated for {entity} ({fields})")]
    UniqueConstraintViolation {
        /// Table the record was destined for.
        entity: &'static str,
        /// Comma separated list of the columns covered by the violated constraint.
        fields: String,
    },
    /// A foreign key referenced a row that does not exist.
    #[error("{entity}.{field} references a row that does not exist")]
    ReferentialIntegrityViolation {
        /// Table holding the foreign key.
        entity: &'static str,
        /// Foreign key column.
        field: String,
        /// Referenced id, when known.
        id: Option<i32>,
    },
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error not covered by the variants above (connection issues, missing tables).
    #[error(transparent)]
    DbErr(#[from] DbErr),
}

impl Error {
    /// Classifies a store error raised while writing to `entity`.
    ///
    /// Unique and foreign key violations are recognised through [`DbErr::sql_err`] for both
    /// SQLite and Postgres; the violated columns are recovered from the backend message.
    pub fn from_db(entity: &'static str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => Error::UniqueConstraintViolation {
                entity,
                fields: ConstraintParser::unique_fields(entity, &message)
                    .unwrap_or_else(|| "unknown".to_string()),
            },
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                Error::ReferentialIntegrityViolation {
                    entity,
                    field: ConstraintParser::foreign_key_field(entity, &message)
                        .unwrap_or_else(|| "unknown".to_string()),
                    id: None,
                }
            }
            _ => Error::DbErr(err),
        }
    }

    /// Maps `validator` output for an input destined for `entity`.
    ///
    /// Missing fields take precedence over length violations, and fields are visited in name
    /// order so the reported field is stable.
    pub fn from_validation(entity: &'static str, errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<_> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| (field.to_string(), errs))
            .collect();
        field_errors.sort_by(|(a, _), (b, _)| a.cmp(b));

        if let Some((field, _)) = field_errors
            .iter()
            .find(|(_, errs)| errs.iter().any(|e| e.code == "required"))
        {
            return Error::RequiredFieldMissing {
                entity,
                field: field.clone(),
            };
        }

        for (field, errs) in &field_errors {
            if let Some(err) = errs.iter().find(|e| e.code == "length") {
                let max = err
                    .params
                    .get("max")
                    .and_then(|max| max.as_u64())
                    .unwrap_or_default();

                return Error::ValueTooLong {
                    entity,
                    field: field.clone(),
                    max,
                };
            }
        }

        // Only `required` and `length` rules are declared on catalog inputs
        Error::RequiredFieldMissing {
            entity,
            field: field_errors
                .into_iter()
                .next()
                .map(|(field, _)| field)
                .unwrap_or_default(),
        }
    }
}
