//! Community handlers: creation, discovery, and membership.

use axum::{
    extract::{Path, State},
    Json,
};
use courtside_core::{
    errors::CourtsideError,
    models::community::{
        Community, CommunityRole, CreateCommunityRequest, GetCommunityResponse,
        JoinCommunityRequest, JoinCommunityResponse,
    },
};
use courtside_db::models::DbCommunityWithCount;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Creates a community; the creator joins as leader in the same
/// transaction.
///
/// # Endpoint
///
/// ```text
/// POST /api/communities
/// ```
#[axum::debug_handler]
pub async fn create_community(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateCommunityRequest>,
) -> Result<Json<Community>, AppError> {
    let community = courtside_db::repositories::community::create_community(
        &state.db_pool,
        payload.creator_id,
        &payload.name,
        payload.description.as_deref(),
        payload.sport.as_deref(),
        payload.has_membership,
    )
    .await
    .map_err(CourtsideError::Database)?;

    Ok(Json(Community {
        id: community.id,
        creator_id: community.creator_id,
        name: community.name,
        description: community.description,
        sport: community.sport,
        has_membership: community.has_membership,
        created_at: community.created_at,
    }))
}

/// Lists all communities with member counts
///
/// # Endpoint
///
/// ```text
/// GET /api/communities
/// ```
#[axum::debug_handler]
pub async fn list_communities(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<GetCommunityResponse>>, AppError> {
    let communities = courtside_db::repositories::community::list_communities(&state.db_pool)
        .await
        .map_err(CourtsideError::Database)?;

    Ok(Json(communities.into_iter().map(to_response).collect()))
}

/// Lists the communities a user belongs to
///
/// # Endpoint
///
/// ```text
/// GET /api/users/:id/communities
/// ```
#[axum::debug_handler]
pub async fn list_my_communities(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<GetCommunityResponse>>, AppError> {
    let communities =
        courtside_db::repositories::community::communities_for_user(&state.db_pool, user_id)
            .await
            .map_err(CourtsideError::Database)?;

    Ok(Json(communities.into_iter().map(to_response).collect()))
}

/// Fetches one community
///
/// # Endpoint
///
/// ```text
/// GET /api/communities/:id
/// ```
#[axum::debug_handler]
pub async fn get_community(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetCommunityResponse>, AppError> {
    let community = courtside_db::repositories::community::get_community_by_id(&state.db_pool, id)
        .await
        .map_err(CourtsideError::Database)?
        .ok_or_else(|| CourtsideError::NotFound(format!("Community with ID {} not found", id)))?;

    Ok(Json(to_response(community)))
}

/// Joins a community as a regular member
///
/// # Endpoint
///
/// ```text
/// POST /api/communities/:id/join
/// ```
///
/// Joining twice is a `409`.
#[axum::debug_handler]
pub async fn join_community(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<JoinCommunityRequest>,
) -> Result<Json<JoinCommunityResponse>, AppError> {
    courtside_db::repositories::community::get_community_by_id(&state.db_pool, id)
        .await
        .map_err(CourtsideError::Database)?
        .ok_or_else(|| CourtsideError::NotFound(format!("Community with ID {} not found", id)))?;

    courtside_db::repositories::community::join_community(&state.db_pool, id, payload.user_id)
        .await
        .map_err(CourtsideError::Database)?
        .ok_or_else(|| CourtsideError::Conflict("Already a member".to_string()))?;

    Ok(Json(JoinCommunityResponse {
        community_id: id,
        role: CommunityRole::Member,
    }))
}

fn to_response(db: DbCommunityWithCount) -> GetCommunityResponse {
    GetCommunityResponse {
        id: db.id,
        creator_id: db.creator_id,
        name: db.name,
        description: db.description,
        sport: db.sport,
        has_membership: db.has_membership,
        member_count: db.member_count,
        created_at: db.created_at,
    }
}
