use crate::models::{DbCourt, DbVenue};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_venue(
    pool: &Pool<Postgres>,
    owner_id: Uuid,
    name: &str,
    location: &str,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<DbVenue> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let venue = sqlx::query_as::<_, DbVenue>(
        r#"
        INSERT INTO venues (id, owner_id, name, location, lat, lng, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, owner_id, name, location, lat, lng, created_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(name)
    .bind(location)
    .bind(lat)
    .bind(lng)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(venue)
}

pub async fn list_venues(pool: &Pool<Postgres>) -> Result<Vec<DbVenue>> {
    let venues = sqlx::query_as::<_, DbVenue>(
        r#"
        SELECT id, owner_id, name, location, lat, lng, created_at
        FROM venues
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(venues)
}

pub async fn venues_by_owner(pool: &Pool<Postgres>, owner_id: Uuid) -> Result<Vec<DbVenue>> {
    let venues = sqlx::query_as::<_, DbVenue>(
        r#"
        SELECT id, owner_id, name, location, lat, lng, created_at
        FROM venues
        WHERE owner_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(venues)
}

pub async fn get_venue_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbVenue>> {
    let venue = sqlx::query_as::<_, DbVenue>(
        r#"
        SELECT id, owner_id, name, location, lat, lng, created_at
        FROM venues
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(venue)
}

pub async fn add_court(
    pool: &Pool<Postgres>,
    venue_id: Uuid,
    name: &str,
    sport: &str,
    capacity: i32,
) -> Result<DbCourt> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let court = sqlx::query_as::<_, DbCourt>(
        r#"
        INSERT INTO courts (id, venue_id, name, sport, capacity, is_active, created_at)
        VALUES ($1, $2, $3, $4, $5, TRUE, $6)
        RETURNING id, venue_id, name, sport, capacity, is_active, created_at
        "#,
    )
    .bind(id)
    .bind(venue_id)
    .bind(name)
    .bind(sport)
    .bind(capacity)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(court)
}

pub async fn courts_by_venue(pool: &Pool<Postgres>, venue_id: Uuid) -> Result<Vec<DbCourt>> {
    let courts = sqlx::query_as::<_, DbCourt>(
        r#"
        SELECT id, venue_id, name, sport, capacity, is_active, created_at
        FROM courts
        WHERE venue_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    Ok(courts)
}

pub async fn get_court_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbCourt>> {
    let court = sqlx::query_as::<_, DbCourt>(
        r#"
        SELECT id, venue_id, name, sport, capacity, is_active, created_at
        FROM courts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(court)
}
