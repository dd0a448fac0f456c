use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProfile {
    pub id: Uuid,
    pub display_name: String,
    pub role: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbVenue {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub location: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCourt {
    pub id: Uuid,
    pub venue_id: Uuid,
    pub name: String,
    pub sport: String,
    pub capacity: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Booking times are stored as zero-padded 24-hour `HH:MM` text. The
/// fixed-width format makes lexicographic comparison in SQL agree with
/// chronological order, which the overlap queries rely on.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub court_id: Uuid,
    pub user_id: Uuid,
    pub event_id: Option<Uuid>,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEvent {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub title: String,
    pub sport: String,
    pub level: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub venue_id: Option<Uuid>,
    pub court_id: Option<Uuid>,
    pub location: Option<String>,
    pub max_players: i32,
    pub participants_count: i32,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Event list row joined with its venue's name and coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEventWithVenue {
    pub id: Uuid,
    pub title: String,
    pub sport: String,
    pub level: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub max_players: i32,
    pub participants_count: i32,
    pub is_featured: bool,
    pub venue_name: Option<String>,
    pub venue_lat: Option<f64>,
    pub venue_lng: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCommunity {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub sport: Option<String>,
    pub has_membership: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCommunityWithCount {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub sport: Option<String>,
    pub has_membership: bool,
    pub member_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCommunityMember {
    pub community_id: Uuid,
    pub user_id: Uuid,
    pub role: String,
}
