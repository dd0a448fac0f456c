//! Booking creation and cancellation handlers.
//!
//! Creation goes through `booking::create_booking`, which re-checks
//! overlap behind a per-(court, date) lock; the handler never inserts
//! after a bare advisory check.

use axum::{
    extract::{Path, State},
    Json,
};
use courtside_core::{
    availability::TimeRange,
    errors::CourtsideError,
    models::booking::{Booking, BookingStatus, CreateBookingRequest},
};
use courtside_db::models::DbBooking;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Books a court for a date and time range
///
/// # Endpoint
///
/// ```text
/// POST /api/courts/:id/bookings
/// ```
///
/// Responds `409 Conflict` with "Time slot not available" when the range
/// overlaps an existing non-cancelled booking.
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Path(court_id): Path<Uuid>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<Booking>, AppError> {
    let range = TimeRange::new(payload.start_time, payload.end_time)?;

    let court = courtside_db::repositories::venue::get_court_by_id(&state.db_pool, court_id)
        .await
        .map_err(CourtsideError::Database)?
        .ok_or_else(|| CourtsideError::NotFound(format!("Court with ID {} not found", court_id)))?;

    if !court.is_active {
        return Err(AppError(CourtsideError::Validation(
            "Court is not active".to_string(),
        )));
    }

    let booking = courtside_db::repositories::booking::create_booking(
        &state.db_pool,
        court.id,
        payload.user_id,
        payload.event_id,
        payload.date,
        &range.start().to_string(),
        &range.end().to_string(),
    )
    .await
    .map_err(CourtsideError::Database)?
    .ok_or_else(|| CourtsideError::Conflict("Time slot not available".to_string()))?;

    Ok(Json(to_booking(booking)?))
}

/// Cancels a booking
///
/// # Endpoint
///
/// ```text
/// DELETE /api/bookings/:id
/// ```
#[axum::debug_handler]
pub async fn cancel_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let cancelled = courtside_db::repositories::booking::cancel_booking(&state.db_pool, id)
        .await
        .map_err(CourtsideError::Database)?;

    if !cancelled {
        return Err(AppError(CourtsideError::NotFound(format!(
            "Active booking with ID {} not found",
            id
        ))));
    }

    Ok(Json(serde_json::json!({ "cancelled": true })))
}

/// Maps a stored booking row to the wire model, parsing the stored HH:MM
/// text and status.
pub(crate) fn to_booking(db: DbBooking) -> Result<Booking, CourtsideError> {
    let status = match db.status.as_str() {
        "confirmed" => BookingStatus::Confirmed,
        "cancelled" => BookingStatus::Cancelled,
        other => {
            return Err(CourtsideError::Internal(
                format!("Unknown booking status {other:?} on row {}", db.id).into(),
            ))
        }
    };

    Ok(Booking {
        id: db.id,
        court_id: db.court_id,
        user_id: db.user_id,
        event_id: db.event_id,
        date: db.date,
        start_time: db.start_time.parse()?,
        end_time: db.end_time.parse()?,
        status,
        created_at: db.created_at,
    })
}
