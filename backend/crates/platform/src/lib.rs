//! Platform - Infrastructure-level collaborators
//!
//! Crosscutting services shared by the domain crates. Currently the
//! password hashing service; anything here must stay domain-agnostic.

pub mod password;
