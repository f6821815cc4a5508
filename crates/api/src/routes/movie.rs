//! Route definitions for the `/movies` resource and its nested roles.

use axum::routing::get;
use axum::Router;

use crate::handlers::{movie, role};
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// DELETE /{id}                    -> delete
/// PATCH  /{id}                    -> patch (auth required)
///
/// GET    /{movie_id}/roles        -> list_by_movie
/// POST   /{movie_id}/roles        -> create
/// ```
pub fn router() -> Router<AppState> {
    let role_routes = Router::new().route("/", get(role::list_by_movie).post(role::create));

    Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route(
            "/{id}",
            get(movie::get_by_id)
                .delete(movie::delete)
                .patch(movie::patch),
        )
        .nest("/{movie_id}/roles", role_routes)
}
