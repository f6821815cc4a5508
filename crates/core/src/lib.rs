//! Domain-level types shared by the database and API crates.
//!
//! This crate has no internal dependencies so it can be used from any layer
//! (repositories, handlers, future CLI tooling) without pulling in sqlx or
//! axum.

pub mod error;
pub mod page;
pub mod types;
pub mod validate;
