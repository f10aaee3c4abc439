//! Features (Feature Catalog) Backend Module
//!
//! Single-table CRUD for the marketing site's feature cards. The only
//! rule is a required heading, so there is no application layer: handlers
//! validate and talk to the repository directly.
//!
//! - `domain/` - Entity and repository trait
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{FeatureError, FeatureResult};
pub use infra::postgres::PgFeatureRepository;
pub use presentation::router::feature_router;
