//! Service layer composing repositories into transport mappings.
//!
//! Services own no state beyond a borrowed connection. They call the repositories in
//! [`crate::data`] and convert the resulting models into the DTOs in [`crate::model`].

pub mod favorite;
