use crate::models::DbProfile;
use argon2::{Argon2, PasswordVerifier};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_profile(
    pool: &Pool<Postgres>,
    display_name: &str,
    password_hash: &str,
) -> Result<DbProfile> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let profile = sqlx::query_as::<_, DbProfile>(
        r#"
        INSERT INTO profiles (id, display_name, role, password_hash, created_at)
        VALUES ($1, $2, NULL, $3, $4)
        RETURNING id, display_name, role, password_hash, created_at
        "#,
    )
    .bind(id)
    .bind(display_name)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(profile)
}

pub async fn get_profile_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbProfile>> {
    let profile = sqlx::query_as::<_, DbProfile>(
        r#"
        SELECT id, display_name, role, password_hash, created_at
        FROM profiles
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

pub async fn update_role(pool: &Pool<Postgres>, id: Uuid, role: &str) -> Result<Option<DbProfile>> {
    let profile = sqlx::query_as::<_, DbProfile>(
        r#"
        UPDATE profiles
        SET role = $2
        WHERE id = $1
        RETURNING id, display_name, role, password_hash, created_at
        "#,
    )
    .bind(id)
    .bind(role)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

/// Verifies a plain text password against the stored Argon2 hash.
pub async fn verify_password(pool: &Pool<Postgres>, id: Uuid, password: &str) -> Result<bool> {
    let Some(profile) = get_profile_by_id(pool, id).await? else {
        return Ok(false);
    };

    let parsed_hash = argon2::PasswordHash::new(&profile.password_hash)
        .map_err(|e| eyre::eyre!("Invalid password hash in database: {}", e))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
