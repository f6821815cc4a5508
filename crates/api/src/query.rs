//! Query-parameter parsing for list endpoints.
//!
//! Parameters arrive as raw strings and are converted leniently: an absent or
//! unparsable value falls back to its default (pagination) or is dropped
//! (filters). List endpoints never reject a request over a bad query
//! parameter, and unrecognized parameters are ignored by serde.

use std::str::FromStr;

use serde::Deserialize;

use cinelog_core::page::PageRequest;
use cinelog_db::models::movie::MovieFilter;
use cinelog_db::models::role::RoleFilter;

/// Recognized query parameters for `GET /movies`.
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    pub title: Option<String>,
    pub year: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

impl MovieListParams {
    /// Build the structured filter from the recognized filter parameters.
    pub fn filter(&self) -> MovieFilter {
        MovieFilter {
            title: non_empty(&self.title),
            year: parse_param(&self.year),
        }
    }

    /// Build the normalized page request, clamping malformed values.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_params(parse_param(&self.page), parse_param(&self.size))
    }
}

/// Recognized query parameters for `GET /movies/{id}/roles`.
///
/// The parent movie id is not a query parameter; the handler injects it from
/// the URL path as an implicit equality constraint.
#[derive(Debug, Default, Deserialize)]
pub struct RoleListParams {
    pub character_name: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

impl RoleListParams {
    pub fn filter(&self) -> RoleFilter {
        RoleFilter {
            character_name: non_empty(&self.character_name),
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_params(parse_param(&self.page), parse_param(&self.size))
    }
}

/// Parse an optional raw parameter, dropping unparsable values.
fn parse_param<T: FromStr>(raw: &Option<String>) -> Option<T> {
    raw.as_deref().and_then(|s| s.parse().ok())
}

/// Treat an empty string filter as absent.
fn non_empty(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
