//! Core domain entities representing the workout tracking data model.
//!
//! # Entity Types
//!
//! - [`Category`] - Shared grouping entity
//! - [`Exercise`] - Named movement type shared across users
//! - [`Lift`] - A logged performance of an exercise, owned by a user
//! - [`User`] - Account with credentials and granted permissions
//! - [`Session`] - Server-side login session
//!
//! # Design Pattern
//!
//! Entities come with separate `New*` structs used for inserts; identifiers and
//! timestamps are assigned by the store.

pub mod category;
pub mod exercise;
pub mod lift;
pub mod session;
pub mod user;

pub use category::{Category, NewCategory};
pub use exercise::{Exercise, NewExercise};
pub use lift::{Lift, NewLift};
pub use session::{NewSession, Session};
pub use user::{DEFAULT_PERMISSIONS, NewUser, User};
