use axum::{
    routing::{delete, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/courts/:id/bookings",
            post(handlers::booking::create_booking),
        )
        .route(
            "/api/bookings/:id",
            delete(handlers::booking::cancel_booking),
        )
}
