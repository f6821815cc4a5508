//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use cinelog_core::error::CoreError;
use cinelog_core::page::Page;
use cinelog_core::types::DbId;
use cinelog_core::validate::check;
use cinelog_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use cinelog_db::repositories::MovieRepo;

use crate::cache::{movie_key, CACHE_CONTROL_PUBLIC_1H, MOVIE_COLLECTION_KEY};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::MovieListParams;
use crate::state::AppState;

/// GET /api/v1/movies
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<Page<Movie>>> {
    let page = MovieRepo::page(&state.pool, &params.filter(), &params.page_request()).await?;
    Ok(Json(page))
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    check(&input)?;
    let movie = MovieRepo::create(&state.pool, &input).await?;
    state.cache.invalidate(MOVIE_COLLECTION_KEY);
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /api/v1/movies/{id}
///
/// The response is publicly cacheable for one hour. The serialized body is
/// also kept in the in-process cache until a mutation invalidates it.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let key = movie_key(id);
    let body = match state.cache.get(&key) {
        Some(cached) => cached,
        None => {
            let movie = MovieRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
            let body = serde_json::to_string(&movie)
                .map_err(|e| AppError::Internal(format!("serialization failed: {e}")))?;
            state.cache.put(key, body.clone());
            body
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, CACHE_CONTROL_PUBLIC_1H),
        ],
        body,
    )
        .into_response())
}

/// DELETE /api/v1/movies/{id}
///
/// Roles cascade at the schema level. Invalidates the resource and collection
/// cache keys after commit.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Movie", id }));
    }
    // The separator-terminated prefix drops any representation nested under
    // the movie (its roles cascade away with it) without touching siblings
    // whose ids merely share leading digits.
    let key = movie_key(id);
    state.cache.invalidate(&key);
    state.cache.invalidate_prefix(&format!("{key}/"));
    state.cache.invalidate(MOVIE_COLLECTION_KEY);
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/movies/{id}
///
/// Requires an authenticated caller. Only the fields present in the body are
/// validated and merged; the id and the roles collection are never touched.
///
/// A missing id is reported before the body is inspected, so an invalid
/// payload against a nonexistent movie yields the empty-body 404.
pub async fn patch(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    check(&input)?;

    // The row can still disappear between the lookup and the write.
    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;

    state.cache.invalidate(&movie_key(id));
    state.cache.invalidate(MOVIE_COLLECTION_KEY);
    tracing::debug!(user_id = user.user_id, movie_id = id, "movie patched");

    Ok(Json(movie))
}
