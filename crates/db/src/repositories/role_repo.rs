//! Repository for the `roles` table.
//!
//! All listing is scoped to an owning movie; the movie id is a mandatory
//! equality constraint, not an optional filter.

use cinelog_core::page::{Page, PageRequest};
use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::{CreateRole, Role, RoleFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, movie_id, character_name, played_by, created_at, updated_at";

/// Provides creation and paginated listing for roles.
pub struct RoleRepo;

impl RoleRepo {
    /// Insert a new role under `movie_id`, returning the created row.
    ///
    /// The foreign key is written explicitly; the caller is responsible for
    /// having verified the movie exists (a missing movie surfaces as an FK
    /// violation otherwise).
    pub async fn create(
        pool: &PgPool,
        movie_id: DbId,
        input: &CreateRole,
    ) -> Result<Role, sqlx::Error> {
        let query = format!(
            "INSERT INTO roles (movie_id, character_name, played_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(movie_id)
            .bind(&input.character_name)
            .bind(&input.played_by)
            .fetch_one(pool)
            .await
    }

    /// Find a role by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE id = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of roles for `movie_id` matching `filter`, plus the
    /// pre-slice total. Ordered by id ascending.
    pub async fn page_by_movie(
        pool: &PgPool,
        movie_id: DbId,
        filter: &RoleFilter,
        request: &PageRequest,
    ) -> Result<Page<Role>, sqlx::Error> {
        let (where_clause, pattern) = build_role_filter(filter);

        let query = format!(
            "SELECT {COLUMNS} FROM roles {where_clause} \
             ORDER BY id ASC \
             LIMIT ${} OFFSET ${}",
            if pattern.is_some() { 3 } else { 2 },
            if pattern.is_some() { 4 } else { 3 }
        );
        let mut q = sqlx::query_as::<_, Role>(&query).bind(movie_id);
        if let Some(ref pattern) = pattern {
            q = q.bind(pattern);
        }
        let items = q
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*)::BIGINT FROM roles {where_clause}");
        let mut q = sqlx::query_scalar::<_, i64>(&count_query).bind(movie_id);
        if let Some(ref pattern) = pattern {
            q = q.bind(pattern);
        }
        let total = q.fetch_one(pool).await?;

        Ok(Page::new(items, total, request))
    }
}

/// Build the WHERE clause for a movie-scoped role listing.
///
/// `$1` is always the movie id; the optional character-name substring match
/// binds as `$2`. Returns the clause and the ILIKE pattern, if any.
fn build_role_filter(filter: &RoleFilter) -> (String, Option<String>) {
    match filter.character_name {
        Some(ref name) => (
            "WHERE movie_id = $1 AND character_name ILIKE $2".to_string(),
            Some(format!("%{name}%")),
        ),
        None => ("WHERE movie_id = $1".to_string(), None),
    }
}
