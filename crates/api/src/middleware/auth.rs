//! # Authentication Module
//!
//! Password hashing and verification for user profiles. Uses Argon2 with a
//! random salt per password; hashes are stored in PHC string format.
//!
//! Session handling and token issuance are out of scope; callers identify
//! themselves with explicit profile IDs in request payloads, and handlers
//! that mutate owned resources check ownership against those IDs.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use eyre::Result;
use uuid::Uuid;

/// Hashes a password using the Argon2 algorithm
///
/// Generates a fresh random salt and uses the default Argon2 parameters
/// (memory: 19MiB, iterations: 3, parallelism: 4).
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    // Create default Argon2 instance
    let argon2 = Argon2::default();

    // Hash the password with salt
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a password against the stored hash for a profile
///
/// Returns `false` both for a wrong password and for an unknown profile,
/// so callers cannot distinguish the two.
pub async fn verify_profile_password(
    pool: &sqlx::PgPool,
    profile_id: Uuid,
    password: &str,
) -> Result<bool> {
    // Delegate to the database repository for verification
    let is_valid =
        courtside_db::repositories::profile::verify_password(pool, profile_id, password).await?;
    Ok(is_valid)
}
