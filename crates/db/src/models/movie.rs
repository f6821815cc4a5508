//! Movie entity model, DTOs and list filter.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub duration_mins: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(range(min = 1878, max = 2100, message = "must be a plausible release year"))]
    pub year: Option<i32>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "must be positive"))]
    pub duration_mins: Option<i32>,
}

/// DTO for a partial movie update. All fields are optional; absent fields are
/// left untouched by the merge and are not validated.
///
/// The id is deliberately not part of this DTO -- identity is taken from the
/// URL path and never merged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovie {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[validate(range(min = 1878, max = 2100, message = "must be a plausible release year"))]
    pub year: Option<i32>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "must be positive"))]
    pub duration_mins: Option<i32>,
}

/// Structured filter for movie listings, built from recognized query
/// parameters. Constraints combine conjunctively (AND).
#[derive(Debug, Clone, Default)]
pub struct MovieFilter {
    /// Case-insensitive substring match on the title.
    pub title: Option<String>,
    /// Exact release-year match.
    pub year: Option<i32>,
}
