use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/courts/:id/availability",
            get(handlers::availability::check_availability),
        )
        .route(
            "/api/courts/:id/slots",
            get(handlers::availability::list_available_slots),
        )
}
