//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Request body for create and update
///
/// `heading` is optional at the serde level so a missing field gets the
/// contract's 400 message instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRequest {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Bare-message response (delete)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
