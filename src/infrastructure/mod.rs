//! Infrastructure layer for external integrations.
//!
//! This layer implements the repository interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`memory`] - In-process implementations backed by a single locked store
//! - [`repositories`] - Bundles one implementation of every repository

pub mod memory;
pub mod persistence;
pub mod repositories;

pub use repositories::Repositories;
