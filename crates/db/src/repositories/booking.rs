//! Booking persistence and the authoritative availability check.
//!
//! The pure engine in `courtside_core::availability` is advisory: a caller
//! that checks and then inserts can race another caller doing the same.
//! [`create_booking`] closes that window by taking a Postgres advisory
//! transaction lock keyed on `(court_id, date)` before re-checking overlap
//! inside the same transaction, so booking creation for one court and day
//! is single-writer.

use crate::models::DbBooking;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Half-open overlap predicate shared by the queries below:
/// a stored booking conflicts iff `start_time < $end AND end_time > $start`.
const OVERLAP_EXISTS: &str = r#"
    SELECT EXISTS (
        SELECT 1 FROM bookings
        WHERE court_id = $1
          AND date = $2
          AND status <> 'cancelled'
          AND start_time < $4
          AND end_time > $3
    )
"#;

/// Creates a confirmed booking, or returns `None` when the range is
/// already taken.
///
/// The overlap re-check and the insert run in one transaction behind a
/// per-`(court, date)` advisory lock, which makes the non-overlap
/// invariant hold even under concurrent creation attempts.
pub async fn create_booking(
    pool: &Pool<Postgres>,
    court_id: Uuid,
    user_id: Uuid,
    event_id: Option<Uuid>,
    date: NaiveDate,
    start_time: &str,
    end_time: &str,
) -> Result<Option<DbBooking>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating booking: court_id={}, date={}, range={}-{}",
        court_id,
        date,
        start_time,
        end_time
    );

    let mut tx = pool.begin().await?;

    // Serialize booking creation per court and day. Released on commit
    // or rollback.
    sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1::text || ':' || $2::text)::bigint)")
        .bind(court_id)
        .bind(date)
        .execute(&mut *tx)
        .await?;

    let taken = sqlx::query_scalar::<_, bool>(OVERLAP_EXISTS)
        .bind(court_id)
        .bind(date)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(&mut *tx)
        .await?;

    if taken {
        tx.rollback().await?;
        tracing::debug!("Booking rejected, range already taken: court_id={}", court_id);
        return Ok(None);
    }

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, court_id, user_id, event_id, date, start_time, end_time, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'confirmed', $8)
        RETURNING id, court_id, user_id, event_id, date, start_time, end_time, status, created_at
        "#,
    )
    .bind(id)
    .bind(court_id)
    .bind(user_id)
    .bind(event_id)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Some(booking))
}

/// Non-cancelled bookings for one court and date, ordered by start time.
/// This is the snapshot the availability engine consumes.
pub async fn active_for_court_date(
    pool: &Pool<Postgres>,
    court_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, court_id, user_id, event_id, date, start_time, end_time, status, created_at
        FROM bookings
        WHERE court_id = $1
          AND date = $2
          AND status <> 'cancelled'
        ORDER BY start_time ASC
        "#,
    )
    .bind(court_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Server-side availability check for a proposed range. Preferred over the
/// in-process engine when reachable, since it reads the current rows.
pub async fn is_court_available(
    pool: &Pool<Postgres>,
    court_id: Uuid,
    date: NaiveDate,
    start_time: &str,
    end_time: &str,
) -> Result<bool> {
    let taken = sqlx::query_scalar::<_, bool>(OVERLAP_EXISTS)
        .bind(court_id)
        .bind(date)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(pool)
        .await?;

    Ok(!taken)
}

/// Marks a booking cancelled; returns `false` when no such booking exists.
pub async fn cancel_booking(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE bookings
        SET status = 'cancelled'
        WHERE id = $1 AND status <> 'cancelled'
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, court_id, user_id, event_id, date, start_time, end_time, status, created_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}
