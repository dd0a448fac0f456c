use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/venues", post(handlers::venue::create_venue))
        .route("/api/venues", get(handlers::venue::list_venues))
        .route("/api/venues/:id", get(handlers::venue::get_venue))
        .route("/api/venues/:id/courts", post(handlers::venue::add_court))
        .route(
            "/api/owners/:id/venues",
            get(handlers::venue::list_my_venues),
        )
}
