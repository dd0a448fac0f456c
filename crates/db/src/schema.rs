use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create profiles table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            display_name VARCHAR(255) NOT NULL,
            role VARCHAR(32) NULL,
            password_hash VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create venues table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            owner_id UUID NOT NULL REFERENCES profiles(id),
            name VARCHAR(255) NOT NULL,
            location VARCHAR(255) NOT NULL,
            lat DOUBLE PRECISION NULL,
            lng DOUBLE PRECISION NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create courts table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS courts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            venue_id UUID NOT NULL REFERENCES venues(id),
            name VARCHAR(255) NOT NULL,
            sport VARCHAR(64) NOT NULL,
            capacity INTEGER NOT NULL DEFAULT 4,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create events table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            creator_id UUID NOT NULL REFERENCES profiles(id),
            title VARCHAR(255) NOT NULL,
            sport VARCHAR(64) NOT NULL,
            level VARCHAR(32) NOT NULL,
            date DATE NOT NULL,
            start_time CHAR(5) NOT NULL,
            end_time CHAR(5) NOT NULL,
            venue_id UUID NULL REFERENCES venues(id),
            court_id UUID NULL REFERENCES courts(id),
            location VARCHAR(255) NULL,
            max_players INTEGER NOT NULL DEFAULT 4,
            participants_count INTEGER NOT NULL DEFAULT 0,
            is_featured BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT event_valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table. Times are zero-padded HH:MM text so that the
    // lexicographic comparisons in the overlap queries are chronological.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            court_id UUID NOT NULL REFERENCES courts(id),
            user_id UUID NOT NULL REFERENCES profiles(id),
            event_id UUID NULL REFERENCES events(id),
            date DATE NOT NULL,
            start_time CHAR(5) NOT NULL,
            end_time CHAR(5) NOT NULL,
            status VARCHAR(16) NOT NULL DEFAULT 'confirmed',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT booking_valid_time_range CHECK (end_time > start_time),
            CONSTRAINT booking_valid_status CHECK (status IN ('confirmed', 'cancelled'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create event_participants table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS event_participants (
            event_id UUID NOT NULL REFERENCES events(id),
            user_id UUID NOT NULL REFERENCES profiles(id),
            joined_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (event_id, user_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create communities table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS communities (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            creator_id UUID NOT NULL REFERENCES profiles(id),
            name VARCHAR(255) NOT NULL,
            description TEXT NULL,
            sport VARCHAR(64) NULL,
            has_membership BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create community_members table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS community_members (
            community_id UUID NOT NULL REFERENCES communities(id),
            user_id UUID NOT NULL REFERENCES profiles(id),
            role VARCHAR(16) NOT NULL DEFAULT 'member',
            joined_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (community_id, user_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_courts_venue_id ON courts(venue_id);
        CREATE INDEX IF NOT EXISTS idx_bookings_court_date ON bookings(court_id, date);
        CREATE INDEX IF NOT EXISTS idx_bookings_event_id ON bookings(event_id);
        CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
        CREATE INDEX IF NOT EXISTS idx_events_sport ON events(sport);
        CREATE INDEX IF NOT EXISTS idx_events_venue_id ON events(venue_id);
        CREATE INDEX IF NOT EXISTS idx_venues_owner_id ON venues(owner_id);
        CREATE INDEX IF NOT EXISTS idx_community_members_user_id ON community_members(user_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
