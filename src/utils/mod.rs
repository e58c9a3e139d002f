//! Helpers shared by the services.
//!
//! - [`session_key`] - Random session keys and their keyed hashes
//! - [`password`] - bcrypt hashing off the async executor
//! - [`password_validation`] - Password strength rules

pub mod password;
pub mod password_validation;
pub mod session_key;
