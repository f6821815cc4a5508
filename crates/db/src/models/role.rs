//! Role entity model, DTOs and list filter.
//!
//! Roles are nested under movies: they are created via
//! `POST /movies/{movie_id}/roles` and always carry the owning movie's id.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A role row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub movie_id: DbId,
    pub character_name: String,
    pub played_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a role under a movie.
///
/// The owning movie id comes from the URL path, not the body, so a client
/// cannot attach a role to a different movie than the one it posted under.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRole {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub character_name: String,
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub played_by: Option<String>,
}

/// Structured filter for role listings. The parent movie id is injected by
/// the handler from the URL path; query parameters can narrow further.
#[derive(Debug, Clone, Default)]
pub struct RoleFilter {
    /// Case-insensitive substring match on the character name.
    pub character_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinelog_core::validate::check;

    #[test]
    fn create_role_requires_character_name() {
        let input: CreateRole = serde_json::from_str(r#"{"character_name":""}"#).unwrap();
        assert!(check(&input).is_err());
    }

    #[test]
    fn played_by_is_optional() {
        let input: CreateRole = serde_json::from_str(r#"{"character_name":"Cobb"}"#).unwrap();
        assert!(check(&input).is_ok());
        assert!(input.played_by.is_none());
    }
}
