//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`cookie`] - Session cookie parsing and `Set-Cookie` values
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Request context, auth gate and validated JSON extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Session resolution and tracing middleware
//! - [`routes`] - Route configuration and composition

pub mod cookie;
pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
