//! Relational data model for a fan-content catalog.
//!
//! Users, characters, planets, and per-user favorites are persisted through sea-orm. Each
//! entity has a repository in [`data`] performing validated writes against an explicitly
//! passed connection handle, and a transport mapping in [`model`]. [`service`] composes the
//! favorite repositories into the nested mappings handed to a serving layer.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
