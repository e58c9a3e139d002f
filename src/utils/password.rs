//! bcrypt hashing and verification.
//!
//! bcrypt only reads the first 72 bytes of its input, so passwords are first
//! reduced to the hex SHA-256 digest (64 bytes) and every byte of the password
//! counts. Both operations are CPU-bound and run on the blocking thread pool.

use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Salt and digest of a real bcrypt hash; only the cost prefix varies.
const DUMMY_HASH_BODY: &str = "CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW";

/// Hex SHA-256 digest fed to bcrypt in place of the raw password.
pub fn prehash(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// A well-formed bcrypt hash at `cost` that no password verifies against.
///
/// Verifying against it costs the same as verifying a real user's hash.
pub fn dummy_hash(cost: u32) -> String {
    format!("$2a${cost:02}${DUMMY_HASH_BODY}")
}

/// Hashes a password with the given bcrypt cost.
pub async fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    let digest = prehash(password);

    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(digest, cost)).await??;

    Ok(hash)
}

/// Checks a password against a stored bcrypt hash.
///
/// A malformed hash is treated as a mismatch.
pub async fn verify_password(password: &str, hash: &str) -> bool {
    let digest = prehash(password);
    let hash = hash.to_owned();

    tokio::task::spawn_blocking(move || bcrypt::verify(&digest, &hash).unwrap_or(false))
        .await
        .unwrap_or(false)
}
