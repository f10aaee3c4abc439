//! Unit tests for the feature catalog
//!
//! Repository behavior is exercised through an in-memory implementation.

use std::sync::{Arc, Mutex};

use kernel::id::FeatureId;

use crate::domain::entity::{Feature, FeatureContent};
use crate::domain::repository::FeatureRepository;
use crate::error::{FeatureError, FeatureResult};

#[derive(Clone, Default)]
struct MemoryFeatureRepository {
    rows: Arc<Mutex<Vec<Feature>>>,
    next_id: Arc<Mutex<i64>>,
}

impl FeatureRepository for MemoryFeatureRepository {
    async fn insert(&self, content: FeatureContent) -> FeatureResult<Feature> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let feature = Feature {
            id: FeatureId::from_db(*next_id),
            heading: content.heading,
            description: content.description,
        };
        self.rows.lock().unwrap().push(feature.clone());
        Ok(feature)
    }

    async fn find_all(&self) -> FeatureResult<Vec<Feature>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.id.value().cmp(&a.id.value()));
        Ok(rows)
    }

    async fn find_by_id(&self, id: FeatureId) -> FeatureResult<Option<Feature>> {
        Ok(self.rows.lock().unwrap().iter().find(|f| f.id == id).cloned())
    }

    async fn update(
        &self,
        id: FeatureId,
        content: FeatureContent,
    ) -> FeatureResult<Option<Feature>> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|f| f.id == id) {
            Some(row) => {
                row.heading = content.heading;
                row.description = content.description;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: FeatureId) -> FeatureResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|f| f.id != id);
        Ok(rows.len() < before)
    }
}

fn content(heading: &str, description: Option<&str>) -> FeatureContent {
    FeatureContent {
        heading: heading.to_string(),
        description: description.map(str::to_string),
    }
}

#[tokio::test]
async fn insert_assigns_sequential_ids() {
    let repo = MemoryFeatureRepository::default();

    let a = repo.insert(content("First", None)).await.unwrap();
    let b = repo.insert(content("Second", Some("details"))).await.unwrap();

    assert_eq!(a.id.value(), 1);
    assert_eq!(b.id.value(), 2);
    assert_eq!(b.description.as_deref(), Some("details"));
}

#[tokio::test]
async fn list_returns_newest_first() {
    let repo = MemoryFeatureRepository::default();

    repo.insert(content("First", None)).await.unwrap();
    repo.insert(content("Second", None)).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].heading, "Second");
    assert_eq!(all[1].heading, "First");
}

#[tokio::test]
async fn get_unknown_id_is_absent() {
    let repo = MemoryFeatureRepository::default();
    assert!(repo.find_by_id(FeatureId::from_db(99)).await.unwrap().is_none());
}

#[tokio::test]
async fn update_replaces_content() {
    let repo = MemoryFeatureRepository::default();

    let created = repo.insert(content("Old", Some("old text"))).await.unwrap();
    let updated = repo
        .update(created.id, content("New", None))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.heading, "New");
    assert_eq!(updated.description, None);
}

#[tokio::test]
async fn update_unknown_id_is_absent() {
    let repo = MemoryFeatureRepository::default();
    let result = repo
        .update(FeatureId::from_db(99), content("New", None))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_removes_exactly_one_row() {
    let repo = MemoryFeatureRepository::default();

    let created = repo.insert(content("Doomed", None)).await.unwrap();
    repo.insert(content("Survivor", None)).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn missing_heading_maps_to_bad_request() {
    let err = FeatureError::Validation("heading is required".to_string());
    assert_eq!(err.status_code().as_u16(), 400);
    assert_eq!(err.to_app_error().message(), "heading is required");
}

#[tokio::test]
async fn not_found_maps_to_404() {
    let err = FeatureError::NotFound;
    assert_eq!(err.status_code().as_u16(), 404);
    assert_eq!(err.to_app_error().message(), "Feature not found");
}

#[test]
fn feature_serializes_bare_row_shape() {
    let feature = Feature {
        id: FeatureId::from_db(3),
        heading: "Fast onboarding".to_string(),
        description: None,
    };

    let json = serde_json::to_value(&feature).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["heading"], "Fast onboarding");
    assert!(json["description"].is_null());
}
