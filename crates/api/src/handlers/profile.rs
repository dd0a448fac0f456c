//! Profile and onboarding handlers.
//!
//! Identity is explicit: callers reference profiles by ID, and the role
//! lives on the profile row rather than in ambient session state.

use axum::{
    extract::{Path, State},
    Json,
};
use courtside_core::{
    errors::CourtsideError,
    models::profile::{
        CreateProfileRequest, CreateProfileResponse, Profile, Role, UpdateRoleRequest,
        UpdateRoleResponse, VerifyPasswordRequest, VerifyPasswordResponse,
    },
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

/// Creates a profile with a hashed password; the role is picked later
/// during onboarding.
///
/// # Endpoint
///
/// ```text
/// POST /api/profiles
/// ```
#[axum::debug_handler]
pub async fn create_profile(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateProfileRequest>,
) -> Result<Json<CreateProfileResponse>, AppError> {
    if payload.display_name.trim().is_empty() {
        return Err(AppError(CourtsideError::Validation(
            "Display name must not be empty".to_string(),
        )));
    }

    let password_hash = auth::hash_password(&payload.password)?;

    let profile = courtside_db::repositories::profile::create_profile(
        &state.db_pool,
        payload.display_name.trim(),
        &password_hash,
    )
    .await
    .map_err(CourtsideError::Database)?;

    Ok(Json(CreateProfileResponse {
        id: profile.id,
        display_name: profile.display_name,
        role: None,
        created_at: profile.created_at,
    }))
}

/// Fetches a profile (without its password hash)
///
/// # Endpoint
///
/// ```text
/// GET /api/profiles/:id
/// ```
#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Profile>, AppError> {
    let profile = courtside_db::repositories::profile::get_profile_by_id(&state.db_pool, id)
        .await
        .map_err(CourtsideError::Database)?
        .ok_or_else(|| CourtsideError::NotFound(format!("Profile with ID {} not found", id)))?;

    Ok(Json(Profile {
        id: profile.id,
        display_name: profile.display_name,
        role: profile.role.as_deref().map(parse_role).transpose()?,
        created_at: profile.created_at,
    }))
}

/// Verifies a password for a profile
///
/// # Endpoint
///
/// ```text
/// POST /api/profiles/:id/verify
/// ```
///
/// Answers `{"valid": false}` for a wrong password and for an unknown
/// profile alike, so the endpoint does not leak which profiles exist.
#[axum::debug_handler]
pub async fn verify_password(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VerifyPasswordRequest>,
) -> Result<Json<VerifyPasswordResponse>, AppError> {
    let valid = auth::verify_profile_password(&state.db_pool, id, &payload.password).await?;
    Ok(Json(VerifyPasswordResponse { valid }))
}

/// Sets the profile's role during onboarding or a role switch
///
/// # Endpoint
///
/// ```text
/// PUT /api/profiles/:id/role
/// ```
#[axum::debug_handler]
pub async fn update_role(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRoleRequest>,
) -> Result<Json<UpdateRoleResponse>, AppError> {
    let role_str = match payload.role {
        Role::Player => "player",
        Role::Organizer => "organizer",
        Role::VenueOwner => "venue_owner",
    };

    courtside_db::repositories::profile::update_role(&state.db_pool, id, role_str)
        .await
        .map_err(CourtsideError::Database)?
        .ok_or_else(|| CourtsideError::NotFound(format!("Profile with ID {} not found", id)))?;

    Ok(Json(UpdateRoleResponse {
        id,
        role: payload.role,
    }))
}

fn parse_role(s: &str) -> Result<Role, CourtsideError> {
    match s {
        "player" => Ok(Role::Player),
        "organizer" => Ok(Role::Organizer),
        "venue_owner" => Ok(Role::VenueOwner),
        other => Err(CourtsideError::Internal(
            format!("Unknown role {other:?} in database").into(),
        )),
    }
}
