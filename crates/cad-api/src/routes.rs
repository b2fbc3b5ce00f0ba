//! API routes

use axum::{routing::get, Router};

use crate::extractors::AppState;
use crate::handlers::users;

/// Create the complete API router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api", api_router())
}

fn api_router() -> Router<AppState> {
    Router::new().route(
        "/users",
        get(users::list_users)
            .post(users::create_user)
            .put(users::update_user)
            .delete(users::delete_user),
    )
}
