//! Database fixtures for catalog tests.
//!
//! Each submodule hangs a fixture accessor off [`TestSetup`](crate::TestSetup):
//!
//! - `user` - user accounts
//! - `catalog` - planets and characters
//! - `favorite` - favorite character and planet links

pub mod catalog;
pub mod favorite;
pub mod user;
