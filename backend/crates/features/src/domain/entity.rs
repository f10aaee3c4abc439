//! Feature Entity

use kernel::id::FeatureId;
use serde::Serialize;

/// Feature catalog record
///
/// Serialized as-is: feature rows carry nothing sensitive and the public
/// site renders them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Store-assigned surrogate key
    pub id: FeatureId,
    pub heading: String,
    pub description: Option<String>,
}

/// Feature content as handed to the store (no id yet)
#[derive(Debug, Clone)]
pub struct FeatureContent {
    pub heading: String,
    pub description: Option<String>,
}
