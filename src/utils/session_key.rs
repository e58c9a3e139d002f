//! Session key generation and keyed hashing.
//!
//! The raw key only ever lives in the client's cookie. The store keeps
//! `HMAC-SHA256(secret, key)`, and each session also carries
//! `HMAC-SHA256(secret, password_hash)` so that changing the password
//! invalidates sessions that were not refreshed.

use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a generated session key.
pub const SESSION_KEY_LEN: usize = 48;

/// Generates a random alphanumeric session key.
///
/// 48 characters from a 62-symbol alphabet, roughly 286 bits of entropy.
pub fn generate_session_key() -> String {
    let mut rng = rand::rng();

    (0..SESSION_KEY_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Returns the lowercase hex HMAC-SHA256 of `value` keyed by `secret`.
pub fn keyed_hash(secret: &str, value: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(value.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Compares two hashes without short-circuiting on the first mismatch.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}
