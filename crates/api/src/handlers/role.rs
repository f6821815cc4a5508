//! Handlers for the `/movies/{movie_id}/roles` resource.
//!
//! Roles exist only under a movie. The parent id comes from the URL path and
//! is written as the role's foreign key; the parent's in-memory state is
//! never touched.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use cinelog_core::error::CoreError;
use cinelog_core::page::Page;
use cinelog_core::types::DbId;
use cinelog_core::validate::check;
use cinelog_db::models::role::{CreateRole, Role};
use cinelog_db::repositories::{MovieRepo, RoleRepo};

use crate::error::{AppError, AppResult};
use crate::query::RoleListParams;
use crate::state::AppState;

/// Resolve the parent movie or fail with an empty-body 404.
async fn require_movie(state: &AppState, movie_id: DbId) -> AppResult<()> {
    MovieRepo::find_by_id(&state.pool, movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;
    Ok(())
}

/// GET /api/v1/movies/{movie_id}/roles
///
/// Lists roles scoped to the parent movie; query parameters can narrow the
/// listing further but never widen it past the parent.
pub async fn list_by_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Query(params): Query<RoleListParams>,
) -> AppResult<Json<Page<Role>>> {
    require_movie(&state, movie_id).await?;
    let page = RoleRepo::page_by_movie(
        &state.pool,
        movie_id,
        &params.filter(),
        &params.page_request(),
    )
    .await?;
    Ok(Json(page))
}

/// POST /api/v1/movies/{movie_id}/roles
pub async fn create(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(input): Json<CreateRole>,
) -> AppResult<(StatusCode, Json<Role>)> {
    require_movie(&state, movie_id).await?;
    check(&input)?;
    let role = RoleRepo::create(&state.pool, movie_id, &input).await?;
    Ok((StatusCode::CREATED, Json(role)))
}
