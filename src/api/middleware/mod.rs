//! HTTP middleware for request processing.
//!
//! Provides session resolution and observability middleware.

pub mod session;
pub mod tracing;
