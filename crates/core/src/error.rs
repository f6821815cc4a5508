use serde::Serialize;

use crate::types::DbId;

/// A single constraint violation on an incoming payload.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Violation {
    /// Name of the offending field (e.g. `"title"`).
    pub field: String,
    /// Human-readable description of the violated constraint.
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
