use crate::models::{DbEvent, DbEventWithVenue};
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Creates an event with the creator already joined. The event row and the
/// creator's participant row are written in one transaction so
/// `participants_count` starts consistent with the participants table.
pub async fn create_event(
    pool: &Pool<Postgres>,
    creator_id: Uuid,
    title: &str,
    sport: &str,
    level: &str,
    date: NaiveDate,
    start_time: &str,
    end_time: &str,
    venue_id: Option<Uuid>,
    court_id: Option<Uuid>,
    location: Option<&str>,
    max_players: i32,
) -> Result<DbEvent> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let mut tx = pool.begin().await?;

    let event = sqlx::query_as::<_, DbEvent>(
        r#"
        INSERT INTO events (
            id, creator_id, title, sport, level, date, start_time, end_time,
            venue_id, court_id, location, max_players, participants_count,
            is_featured, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, 1, FALSE, $13)
        RETURNING id, creator_id, title, sport, level, date, start_time, end_time,
                  venue_id, court_id, location, max_players, participants_count,
                  is_featured, created_at
        "#,
    )
    .bind(id)
    .bind(creator_id)
    .bind(title)
    .bind(sport)
    .bind(level)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .bind(venue_id)
    .bind(court_id)
    .bind(location)
    .bind(max_players)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO event_participants (event_id, user_id, joined_at)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(id)
    .bind(creator_id)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(event)
}

/// Removes an event and its participant rows. Used to roll creation back
/// when the accompanying court booking turns out to conflict.
pub async fn delete_event(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM event_participants WHERE event_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

pub async fn get_event_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbEvent>> {
    let event = sqlx::query_as::<_, DbEvent>(
        r#"
        SELECT id, creator_id, title, sport, level, date, start_time, end_time,
               venue_id, court_id, location, max_players, participants_count,
               is_featured, created_at
        FROM events
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(event)
}

/// Upcoming events joined with venue name and coordinates, newest-date
/// last, optionally filtered by sport, level, and a free-text query over
/// title, location, and venue name.
pub async fn list_events(
    pool: &Pool<Postgres>,
    sport: Option<&str>,
    level: Option<&str>,
    query: Option<&str>,
) -> Result<Vec<DbEventWithVenue>> {
    let pattern = query.map(|q| format!("%{q}%"));

    let events = sqlx::query_as::<_, DbEventWithVenue>(
        r#"
        SELECT e.id, e.title, e.sport, e.level, e.date, e.start_time, e.end_time,
               e.location, e.max_players, e.participants_count, e.is_featured,
               v.name AS venue_name, v.lat AS venue_lat, v.lng AS venue_lng
        FROM events e
        LEFT JOIN venues v ON v.id = e.venue_id
        WHERE ($1::text IS NULL OR LOWER(e.sport) = LOWER($1))
          AND ($2::text IS NULL OR e.level = $2)
          AND ($3::text IS NULL
               OR e.title ILIKE $3
               OR e.location ILIKE $3
               OR v.name ILIKE $3)
        ORDER BY e.date ASC, e.start_time ASC
        "#,
    )
    .bind(sport)
    .bind(level)
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(events)
}

/// Adds a participant and bumps `participants_count` in the same
/// transaction. Returns the new count, or `None` when the user already
/// joined (unique violation on the participants primary key).
pub async fn join_event(
    pool: &Pool<Postgres>,
    event_id: Uuid,
    user_id: Uuid,
) -> Result<Option<i32>> {
    let mut tx = pool.begin().await?;

    let inserted = sqlx::query(
        r#"
        INSERT INTO event_participants (event_id, user_id)
        VALUES ($1, $2)
        "#,
    )
    .bind(event_id)
    .bind(user_id)
    .execute(&mut *tx)
    .await;

    if let Err(err) = inserted {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some("23505") {
                tx.rollback().await?;
                return Ok(None);
            }
        }
        return Err(err.into());
    }

    let count = sqlx::query_scalar::<_, i32>(
        r#"
        UPDATE events
        SET participants_count = participants_count + 1
        WHERE id = $1
        RETURNING participants_count
        "#,
    )
    .bind(event_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Some(count))
}
