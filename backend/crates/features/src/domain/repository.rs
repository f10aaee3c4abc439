//! Repository Trait

use kernel::id::FeatureId;

use crate::domain::entity::{Feature, FeatureContent};
use crate::error::FeatureResult;

/// Feature catalog repository trait
#[trait_variant::make(FeatureRepository: Send)]
pub trait LocalFeatureRepository {
    /// Insert a new row; the store assigns the id
    async fn insert(&self, content: FeatureContent) -> FeatureResult<Feature>;

    /// All rows, newest first
    async fn find_all(&self) -> FeatureResult<Vec<Feature>>;

    /// Find one row by id
    async fn find_by_id(&self, id: FeatureId) -> FeatureResult<Option<Feature>>;

    /// Replace a row's content; `None` when the id does not exist
    async fn update(&self, id: FeatureId, content: FeatureContent)
    -> FeatureResult<Option<Feature>>;

    /// Delete a row; `false` when the id does not exist
    async fn delete(&self, id: FeatureId) -> FeatureResult<bool>;
}
