//! Venue and court management handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use courtside_core::{
    errors::CourtsideError,
    models::venue::{Court, CreateCourtRequest, CreateVenueRequest, GetVenueResponse, Venue},
};
use courtside_db::models::{DbCourt, DbVenue};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Registers a venue
///
/// # Endpoint
///
/// ```text
/// POST /api/venues
/// ```
#[axum::debug_handler]
pub async fn create_venue(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateVenueRequest>,
) -> Result<Json<Venue>, AppError> {
    let venue = courtside_db::repositories::venue::create_venue(
        &state.db_pool,
        payload.owner_id,
        &payload.name,
        &payload.location,
        payload.lat,
        payload.lng,
    )
    .await
    .map_err(CourtsideError::Database)?;

    Ok(Json(to_venue(venue)))
}

/// Lists all venues with their courts
///
/// # Endpoint
///
/// ```text
/// GET /api/venues
/// ```
#[axum::debug_handler]
pub async fn list_venues(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<GetVenueResponse>>, AppError> {
    let venues = courtside_db::repositories::venue::list_venues(&state.db_pool)
        .await
        .map_err(CourtsideError::Database)?;

    Ok(Json(with_courts(&state.db_pool, venues).await?))
}

/// Lists the venues owned by one profile
///
/// # Endpoint
///
/// ```text
/// GET /api/owners/:id/venues
/// ```
#[axum::debug_handler]
pub async fn list_my_venues(
    State(state): State<Arc<ApiState>>,
    Path(owner_id): Path<Uuid>,
) -> Result<Json<Vec<GetVenueResponse>>, AppError> {
    let venues = courtside_db::repositories::venue::venues_by_owner(&state.db_pool, owner_id)
        .await
        .map_err(CourtsideError::Database)?;

    Ok(Json(with_courts(&state.db_pool, venues).await?))
}

/// Fetches one venue with its courts
///
/// # Endpoint
///
/// ```text
/// GET /api/venues/:id
/// ```
#[axum::debug_handler]
pub async fn get_venue(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetVenueResponse>, AppError> {
    let venue = courtside_db::repositories::venue::get_venue_by_id(&state.db_pool, id)
        .await
        .map_err(CourtsideError::Database)?
        .ok_or_else(|| CourtsideError::NotFound(format!("Venue with ID {} not found", id)))?;

    let mut responses = with_courts(&state.db_pool, vec![venue]).await?;
    Ok(Json(responses.remove(0)))
}

/// Adds a court to a venue
///
/// # Endpoint
///
/// ```text
/// POST /api/venues/:id/courts
/// ```
///
/// Only the venue owner may add courts; a mismatched `owner_id` is a 403.
#[axum::debug_handler]
pub async fn add_court(
    State(state): State<Arc<ApiState>>,
    Path(venue_id): Path<Uuid>,
    Json(payload): Json<CreateCourtRequest>,
) -> Result<Json<Court>, AppError> {
    let venue = courtside_db::repositories::venue::get_venue_by_id(&state.db_pool, venue_id)
        .await
        .map_err(CourtsideError::Database)?
        .ok_or_else(|| CourtsideError::NotFound(format!("Venue with ID {} not found", venue_id)))?;

    if venue.owner_id != payload.owner_id {
        return Err(AppError(CourtsideError::Authorization(
            "Only the venue owner can add courts".to_string(),
        )));
    }

    let court = courtside_db::repositories::venue::add_court(
        &state.db_pool,
        venue.id,
        &payload.name,
        &payload.sport,
        payload.capacity.unwrap_or(4),
    )
    .await
    .map_err(CourtsideError::Database)?;

    Ok(Json(to_court(court)))
}

async fn with_courts(
    pool: &PgPool,
    venues: Vec<DbVenue>,
) -> Result<Vec<GetVenueResponse>, CourtsideError> {
    let mut responses = Vec::with_capacity(venues.len());
    for venue in venues {
        let courts = courtside_db::repositories::venue::courts_by_venue(pool, venue.id)
            .await
            .map_err(CourtsideError::Database)?;

        responses.push(GetVenueResponse {
            id: venue.id,
            owner_id: venue.owner_id,
            name: venue.name,
            location: venue.location,
            lat: venue.lat,
            lng: venue.lng,
            created_at: venue.created_at,
            courts: courts.into_iter().map(to_court).collect(),
        });
    }
    Ok(responses)
}

fn to_venue(db: DbVenue) -> Venue {
    Venue {
        id: db.id,
        owner_id: db.owner_id,
        name: db.name,
        location: db.location,
        lat: db.lat,
        lng: db.lng,
        created_at: db.created_at,
    }
}

fn to_court(db: DbCourt) -> Court {
    Court {
        id: db.id,
        venue_id: db.venue_id,
        name: db.name,
        sport: db.sport,
        capacity: db.capacity,
        is_active: db.is_active,
        created_at: db.created_at,
    }
}
