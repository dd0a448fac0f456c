use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::availability::TimeOfDay;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub title: String,
    pub sport: String,
    pub level: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub venue_id: Option<Uuid>,
    pub court_id: Option<Uuid>,
    pub location: Option<String>,
    pub max_players: i32,
    pub participants_count: i32,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub creator_id: Uuid,
    pub title: String,
    pub sport: String,
    pub level: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub venue_id: Option<Uuid>,
    /// When set, a confirmed booking for this court is created together
    /// with the event; creation fails with a conflict if the range is
    /// already taken.
    pub court_id: Option<Uuid>,
    pub location: Option<String>,
    pub max_players: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub booking_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// One row of the event list, joined with its venue and optionally
/// annotated with the distance to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: Uuid,
    pub title: String,
    pub sport: String,
    pub level: String,
    pub date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub location: Option<String>,
    pub venue_name: Option<String>,
    pub max_players: i32,
    pub participants_count: i32,
    pub is_featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinEventRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinEventResponse {
    pub event_id: Uuid,
    pub participants_count: i32,
}
