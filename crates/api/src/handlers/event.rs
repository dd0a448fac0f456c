//! # Event Handlers
//!
//! Event discovery, creation, and participation. Creating an event on a
//! court also books the court: the event row is written first, then the
//! booking is created through the serialized write path with the event ID
//! attached. When the booking turns out to conflict, the event is rolled
//! back and the caller gets a `409` with "Time slot not available".

use axum::{
    extract::{Path, Query, State},
    Json,
};
use courtside_core::{
    availability::TimeRange,
    errors::CourtsideError,
    geo::haversine_km,
    models::event::{
        CreateEventRequest, CreateEventResponse, Event, EventSummary, JoinEventRequest,
        JoinEventResponse,
    },
};
use courtside_db::models::{DbEvent, DbEventWithVenue};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the event list endpoint
///
/// # Fields
///
/// * `sport` - Exact sport filter, case-insensitive
/// * `level` - Exact skill level filter
/// * `q` - Free-text search over title, location, and venue name
/// * `lat` / `lng` - Caller coordinates; when both are present the list is
///   sorted nearest-first by Haversine distance to the event venue
#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    pub sport: Option<String>,
    pub level: Option<String>,
    pub q: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Creates an event, booking the requested court in the same flow
///
/// # Endpoint
///
/// ```text
/// POST /api/events
/// ```
#[axum::debug_handler]
pub async fn create_event(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<Json<CreateEventResponse>, AppError> {
    // Fail fast on an inverted or empty range.
    let range = TimeRange::new(payload.start_time, payload.end_time)?;

    // An event on a court must reference an existing, active one.
    if let Some(court_id) = payload.court_id {
        let court = courtside_db::repositories::venue::get_court_by_id(&state.db_pool, court_id)
            .await
            .map_err(CourtsideError::Database)?
            .ok_or_else(|| {
                CourtsideError::NotFound(format!("Court with ID {} not found", court_id))
            })?;

        if !court.is_active {
            return Err(AppError(CourtsideError::Validation(
                "Court is not active".to_string(),
            )));
        }
    }

    let event = courtside_db::repositories::event::create_event(
        &state.db_pool,
        payload.creator_id,
        &payload.title,
        &payload.sport,
        &payload.level,
        payload.date,
        &range.start().to_string(),
        &range.end().to_string(),
        payload.venue_id,
        payload.court_id,
        payload.location.as_deref(),
        payload.max_players,
    )
    .await
    .map_err(CourtsideError::Database)?;

    // Book the court, linked to the event just created. On conflict the
    // event is removed again so no unbookable event is left behind.
    let mut booking_id = None;
    if let Some(court_id) = payload.court_id {
        let booking = courtside_db::repositories::booking::create_booking(
            &state.db_pool,
            court_id,
            payload.creator_id,
            Some(event.id),
            payload.date,
            &range.start().to_string(),
            &range.end().to_string(),
        )
        .await
        .map_err(CourtsideError::Database)?;

        match booking {
            Some(booking) => booking_id = Some(booking.id),
            None => {
                courtside_db::repositories::event::delete_event(&state.db_pool, event.id)
                    .await
                    .map_err(CourtsideError::Database)?;
                return Err(AppError(CourtsideError::Conflict(
                    "Time slot not available".to_string(),
                )));
            }
        }
    }

    Ok(Json(CreateEventResponse {
        id: event.id,
        title: event.title,
        date: event.date,
        start_time: payload.start_time,
        end_time: payload.end_time,
        booking_id,
        created_at: event.created_at,
    }))
}

/// Lists events with optional filters and nearest-first ordering
///
/// # Endpoint
///
/// ```text
/// GET /api/events?sport=padel&level=Open&q=river&lat=52.37&lng=4.90
/// ```
#[axum::debug_handler]
pub async fn list_events(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Vec<EventSummary>>, AppError> {
    let rows = courtside_db::repositories::event::list_events(
        &state.db_pool,
        query.sport.as_deref(),
        query.level.as_deref(),
        query.q.as_deref(),
    )
    .await
    .map_err(CourtsideError::Database)?;

    let origin = match (query.lat, query.lng) {
        (Some(lat), Some(lng)) => Some((lat, lng)),
        _ => None,
    };

    let mut events = rows
        .into_iter()
        .map(|row| to_summary(row, origin))
        .collect::<Result<Vec<_>, _>>()?;

    // Nearest first when the caller told us where they are; events whose
    // venue has no coordinates sort last.
    if origin.is_some() {
        events.sort_by(|a, b| match (a.distance_km, b.distance_km) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
    }

    Ok(Json(events))
}

/// Fetches one event
///
/// # Endpoint
///
/// ```text
/// GET /api/events/:id
/// ```
#[axum::debug_handler]
pub async fn get_event(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, AppError> {
    let event = courtside_db::repositories::event::get_event_by_id(&state.db_pool, id)
        .await
        .map_err(CourtsideError::Database)?
        .ok_or_else(|| CourtsideError::NotFound(format!("Event with ID {} not found", id)))?;

    Ok(Json(to_event(event)?))
}

/// Joins an event
///
/// # Endpoint
///
/// ```text
/// POST /api/events/:id/join
/// ```
///
/// The participant insert and the `participants_count` increment happen in
/// one transaction, so the returned count reflects the join. Joining twice
/// is a `409`.
#[axum::debug_handler]
pub async fn join_event(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<JoinEventRequest>,
) -> Result<Json<JoinEventResponse>, AppError> {
    courtside_db::repositories::event::get_event_by_id(&state.db_pool, id)
        .await
        .map_err(CourtsideError::Database)?
        .ok_or_else(|| CourtsideError::NotFound(format!("Event with ID {} not found", id)))?;

    let count = courtside_db::repositories::event::join_event(&state.db_pool, id, payload.user_id)
        .await
        .map_err(CourtsideError::Database)?
        .ok_or_else(|| CourtsideError::Conflict("Already joined".to_string()))?;

    Ok(Json(JoinEventResponse {
        event_id: id,
        participants_count: count,
    }))
}

fn to_event(db: DbEvent) -> Result<Event, CourtsideError> {
    Ok(Event {
        id: db.id,
        creator_id: db.creator_id,
        title: db.title,
        sport: db.sport,
        level: db.level,
        date: db.date,
        start_time: db.start_time.parse()?,
        end_time: db.end_time.parse()?,
        venue_id: db.venue_id,
        court_id: db.court_id,
        location: db.location,
        max_players: db.max_players,
        participants_count: db.participants_count,
        is_featured: db.is_featured,
        created_at: db.created_at,
    })
}

fn to_summary(
    row: DbEventWithVenue,
    origin: Option<(f64, f64)>,
) -> Result<EventSummary, CourtsideError> {
    let distance_km = match (origin, row.venue_lat, row.venue_lng) {
        (Some((lat, lng)), Some(venue_lat), Some(venue_lng)) => {
            Some(haversine_km(lat, lng, venue_lat, venue_lng))
        }
        _ => None,
    };

    Ok(EventSummary {
        id: row.id,
        title: row.title,
        sport: row.sport,
        level: row.level,
        date: row.date,
        start_time: row.start_time.parse()?,
        end_time: row.end_time.parse()?,
        location: row.location,
        venue_name: row.venue_name,
        max_players: row.max_players,
        participants_count: row.participants_count,
        is_featured: row.is_featured,
        distance_km,
    })
}
