use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/profiles", post(handlers::profile::create_profile))
        .route("/api/profiles/:id", get(handlers::profile::get_profile))
        .route(
            "/api/profiles/:id/verify",
            post(handlers::profile::verify_password),
        )
        .route(
            "/api/profiles/:id/role",
            put(handlers::profile::update_role),
        )
}
