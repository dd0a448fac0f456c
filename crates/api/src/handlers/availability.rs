//! # Availability Handlers
//!
//! This module contains handlers for checking whether a time range is free
//! on a court and for enumerating the free slots in a day. Both consume the
//! pure engine in `courtside_core::availability`.
//!
//! ## Check strategy
//!
//! The range check prefers the authoritative server-side query
//! (`booking::is_court_available`), which evaluates the overlap predicate
//! against the current rows. When that query fails, the handler falls back
//! to fetching the non-cancelled booking snapshot for the court and date
//! and running the in-process check. A failure to fetch the snapshot is a
//! hard stop: availability is never reported from partial data, since an
//! empty substitute set would make every busy court look free.
//!
//! Either way the answer is advisory. The non-overlap invariant is enforced
//! at write time inside `booking::create_booking`, which serializes
//! creation per court and date.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use courtside_core::{
    availability::{available_slots, is_range_available, SlotConfig, TimeRange},
    errors::CourtsideError,
    models::booking::{AvailabilityResponse, GetSlotsResponse},
};
use courtside_db::models::DbBooking;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the availability check endpoint
///
/// # Fields
///
/// * `date` - Calendar day to check, `YYYY-MM-DD`
/// * `start` / `end` - Proposed range as zero-padded `HH:MM`
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub start: String,
    pub end: String,
}

/// Query parameters for the free-slot listing endpoint
///
/// Operating hours and slot width default to the venue-wide 08:00-22:00
/// window with hourly slots when not supplied.
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: NaiveDate,
    pub operating_start: Option<String>,
    pub operating_end: Option<String>,
    pub slot_minutes: Option<u16>,
}

/// Checks whether a proposed time range is free on a court
///
/// # Endpoint
///
/// ```text
/// GET /api/courts/:id/availability?date=2026-09-12&start=10:00&end=11:00
/// ```
///
/// Malformed times and inverted ranges are rejected with a validation
/// error before any storage access; an unknown court is a 404. The
/// response is `{"available": bool}` — a `false` is a normal outcome for
/// the caller to branch on, not an error.
#[axum::debug_handler]
pub async fn check_availability(
    State(state): State<Arc<ApiState>>,
    Path(court_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    // Fail fast on malformed input; also normalizes the HH:MM strings.
    let proposed = TimeRange::parse(&query.start, &query.end)?;

    let court = courtside_db::repositories::venue::get_court_by_id(&state.db_pool, court_id)
        .await
        .map_err(CourtsideError::Database)?
        .ok_or_else(|| CourtsideError::NotFound(format!("Court with ID {} not found", court_id)))?;

    // Prefer the authoritative server-side check.
    match courtside_db::repositories::booking::is_court_available(
        &state.db_pool,
        court.id,
        query.date,
        &proposed.start().to_string(),
        &proposed.end().to_string(),
    )
    .await
    {
        Ok(available) => Ok(Json(AvailabilityResponse { available })),
        Err(err) => {
            tracing::warn!(
                "Server-side availability check failed, falling back to in-process check: {err}"
            );

            let snapshot = courtside_db::repositories::booking::active_for_court_date(
                &state.db_pool,
                court.id,
                query.date,
            )
            .await
            .map_err(CourtsideError::Database)?;

            let bookings = booking_ranges(&snapshot)?;
            Ok(Json(AvailabilityResponse {
                available: is_range_available(&bookings, &proposed),
            }))
        }
    }
}

/// Lists the free slots on a court for one day
///
/// # Endpoint
///
/// ```text
/// GET /api/courts/:id/slots?date=2026-09-12
/// ```
///
/// Fetches the non-cancelled booking snapshot for the court and date and
/// tiles the operating window with fixed-width candidates, returning the
/// ones no booking overlaps, in chronological order. The slot picker in
/// the client renders these directly.
#[axum::debug_handler]
pub async fn list_available_slots(
    State(state): State<Arc<ApiState>>,
    Path(court_id): Path<Uuid>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<GetSlotsResponse>, AppError> {
    let config = slot_config(&query)?;

    let court = courtside_db::repositories::venue::get_court_by_id(&state.db_pool, court_id)
        .await
        .map_err(CourtsideError::Database)?
        .ok_or_else(|| CourtsideError::NotFound(format!("Court with ID {} not found", court_id)))?;

    let snapshot = courtside_db::repositories::booking::active_for_court_date(
        &state.db_pool,
        court.id,
        query.date,
    )
    .await
    .map_err(CourtsideError::Database)?;

    let bookings = booking_ranges(&snapshot)?;
    let slots = available_slots(&bookings, &config);

    Ok(Json(GetSlotsResponse {
        court_id: court.id,
        date: query.date,
        slots,
    }))
}

/// Builds a slot configuration from optional query overrides. Validation
/// lives in `SlotConfig::new`, which rejects an empty operating window and
/// a zero or longer-than-a-day duration.
fn slot_config(query: &SlotsQuery) -> Result<SlotConfig, CourtsideError> {
    let defaults = SlotConfig::default();

    let operating_start = match &query.operating_start {
        Some(s) => s.parse()?,
        None => defaults.operating_start,
    };
    let operating_end = match &query.operating_end {
        Some(s) => s.parse()?,
        None => defaults.operating_end,
    };

    SlotConfig::new(
        operating_start,
        operating_end,
        query.slot_minutes.unwrap_or(defaults.slot_duration_minutes),
    )
}

/// Converts a booking snapshot into engine ranges. The schema's check
/// constraints keep stored rows well-formed, so a parse failure here means
/// corrupt data rather than bad user input.
pub(crate) fn booking_ranges(snapshot: &[DbBooking]) -> Result<Vec<TimeRange>, CourtsideError> {
    snapshot
        .iter()
        .map(|booking| {
            TimeRange::parse(&booking.start_time, &booking.end_time).map_err(|err| {
                CourtsideError::Internal(
                    format!("Corrupt booking row {}: {err}", booking.id).into(),
                )
            })
        })
        .collect()
}
