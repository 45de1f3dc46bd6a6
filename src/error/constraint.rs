//! Recovers violated column names from backend constraint messages.
//!
//! SQLite names the columns directly (`UNIQUE constraint failed: user.email`) while Postgres
//! names the constraint (`violates unique constraint "user_email_key"`), so both forms are
//! handled here.

use std::sync::OnceLock;

use regex::Regex;

/// Composite unique indexes declared by the schema, keyed by constraint name.
const COMPOSITE_UNIQUE_CONSTRAINTS: &[(&str, &str)] = &[
    ("unique_favorite_character", "user_id, character_id"),
    ("unique_favorite_planet", "user_id, planet_id"),
];

struct Patterns {
    sqlite_columns: Regex,
    constraint_name: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| Patterns {
        sqlite_columns: Regex::new(r"constraint failed: (.+)$").expect("valid regex"),
        constraint_name: Regex::new(r#"constraint "([^"]+)""#).expect("valid regex"),
    })
}

/// Column recovery for unique and foreign key violations.
pub struct ConstraintParser;

impl ConstraintParser {
    /// Returns the comma separated columns covered by a violated unique constraint.
    pub fn unique_fields(entity: &str, message: &str) -> Option<String> {
        let patterns = patterns();

        if let Some(columns) = patterns.sqlite_columns.captures(message.trim()) {
            let fields = columns[1]
                .split(',')
                .map(|column| column.trim().rsplit('.').next().unwrap_or(column).to_string())
                .collect::<Vec<_>>()
                .join(", ");

            return Some(fields);
        }

        let name = patterns.constraint_name.captures(message)?;
        let name = &name[1];

        if let Some((_, fields)) = COMPOSITE_UNIQUE_CONSTRAINTS
            .iter()
            .find(|(constraint, _)| *constraint == name)
        {
            return Some(fields.to_string());
        }

        // Postgres names inline unique columns `<table>_<column>_key`
        let field = name.strip_prefix(&format!("{}_", entity)).unwrap_or(name);
        let field = field.strip_suffix("_key").unwrap_or(field);

        Some(field.to_string())
    }

    /// Returns the foreign key column named by a violated `fk_<table>_<column>` constraint.
    ///
    /// SQLite reports foreign key failures without naming the constraint, so `None` is returned
    /// for its messages.
    pub fn foreign_key_field(entity: &str, message: &str) -> Option<String> {
        let name = patterns().constraint_name.captures(message)?;

        name[1]
            .strip_prefix(&format!("fk_{}_", entity))
            .map(|field| field.to_string())
    }
}
