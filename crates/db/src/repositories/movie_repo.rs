//! Repository for the `movies` table.

use cinelog_core::page::{Page, PageRequest};
use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, MovieFilter, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, year, description, duration_mins, created_at, updated_at";

/// Provides CRUD and paginated listing for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, year, description, duration_mins)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.year)
            .bind(&input.description)
            .bind(input.duration_mins)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of movies matching `filter`, plus the pre-slice total.
    ///
    /// Constraints combine conjunctively. Ordering is by id ascending so
    /// pages are deterministic across requests.
    pub async fn page(
        pool: &PgPool,
        filter: &MovieFilter,
        request: &PageRequest,
    ) -> Result<Page<Movie>, sqlx::Error> {
        let (where_clause, binds) = build_movie_filter(filter);

        let query = format!(
            "SELECT {COLUMNS} FROM movies {where_clause} \
             ORDER BY id ASC \
             LIMIT ${} OFFSET ${}",
            binds.len() + 1,
            binds.len() + 2
        );
        let q = bind_values(sqlx::query_as::<_, Movie>(&query), &binds);
        let items = q
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*)::BIGINT FROM movies {where_clause}");
        let q = bind_values_scalar(sqlx::query_scalar::<_, i64>(&count_query), &binds);
        let total = q.fetch_one(pool).await?;

        Ok(Page::new(items, total, request))
    }

    /// Apply a partial update to a movie. Only non-`None` fields in `input`
    /// overwrite the stored row; the id and the roles collection are never
    /// touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                year = COALESCE($3, year),
                description = COALESCE($4, description),
                duration_mins = COALESCE($5, duration_mins),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.year)
            .bind(&input.description)
            .bind(input.duration_mins)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was removed. Roles
    /// cascade at the schema level.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// A value to bind into a dynamically built movie filter query.
enum BindValue {
    Text(String),
    Int(i32),
}

/// Build the conjunctive WHERE clause and bind list for a movie filter.
fn build_movie_filter(filter: &MovieFilter) -> (String, Vec<BindValue>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut binds: Vec<BindValue> = Vec::new();

    if let Some(ref title) = filter.title {
        conditions.push(format!("title ILIKE ${}", binds.len() + 1));
        binds.push(BindValue::Text(format!("%{title}%")));
    }

    if let Some(year) = filter.year {
        conditions.push(format!("year = ${}", binds.len() + 1));
        binds.push(BindValue::Int(year));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, binds)
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    binds: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for value in binds {
        q = match value {
            BindValue::Text(s) => q.bind(s),
            BindValue::Int(i) => q.bind(i),
        };
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
fn bind_values_scalar<'q, O>(
    mut q: sqlx::query::QueryScalar<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    binds: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for value in binds {
        q = match value {
            BindValue::Text(s) => q.bind(s),
            BindValue::Int(i) => q.bind(i),
        };
    }
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_has_no_where_clause() {
        let (clause, binds) = build_movie_filter(&MovieFilter::default());
        assert!(clause.is_empty());
        assert!(binds.is_empty());
    }

    #[test]
    fn title_filter_uses_substring_match() {
        let filter = MovieFilter {
            title: Some("incep".into()),
            year: None,
        };
        let (clause, binds) = build_movie_filter(&filter);
        assert_eq!(clause, "WHERE title ILIKE $1");
        assert_eq!(binds.len(), 1);
    }

    #[test]
    fn combined_filters_are_conjunctive() {
        let filter = MovieFilter {
            title: Some("incep".into()),
            year: Some(2010),
        };
        let (clause, _) = build_movie_filter(&filter);
        assert_eq!(clause, "WHERE title ILIKE $1 AND year = $2");
    }
}
