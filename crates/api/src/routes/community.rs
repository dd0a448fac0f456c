use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/communities",
            post(handlers::community::create_community),
        )
        .route("/api/communities", get(handlers::community::list_communities))
        .route(
            "/api/communities/:id",
            get(handlers::community::get_community),
        )
        .route(
            "/api/communities/:id/join",
            post(handlers::community::join_community),
        )
        .route(
            "/api/users/:id/communities",
            get(handlers::community::list_my_communities),
        )
}
