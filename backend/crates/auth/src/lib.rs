//! Auth (Credential Management) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait
//! - `application/` - Register / login use cases
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Admin registration with duplicate-email detection
//! - Login with a single generic failure message (no account enumeration)
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (tunable cost factor)
//! - Verification uses bcrypt's constant-time comparison
//! - Credential records reach the response boundary only through the
//!   public-profile projection; the hash is never serialized

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAdminRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
