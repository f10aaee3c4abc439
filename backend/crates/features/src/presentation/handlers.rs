//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::id::FeatureId;

use crate::domain::entity::{Feature, FeatureContent};
use crate::domain::repository::FeatureRepository;
use crate::error::{FeatureError, FeatureResult};
use crate::presentation::dto::{FeatureRequest, MessageResponse};

/// Shared state for feature handlers
#[derive(Clone)]
pub struct FeatureAppState<R>
where
    R: FeatureRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

fn content_from(req: FeatureRequest) -> FeatureResult<FeatureContent> {
    let heading = req.heading.unwrap_or_default();
    if heading.is_empty() {
        return Err(FeatureError::Validation("heading is required".to_string()));
    }
    Ok(FeatureContent {
        heading,
        description: req.description,
    })
}

/// POST /api/features
pub async fn create_feature<R>(
    State(state): State<FeatureAppState<R>>,
    Json(req): Json<FeatureRequest>,
) -> FeatureResult<impl IntoResponse>
where
    R: FeatureRepository + Clone + Send + Sync + 'static,
{
    let feature = state.repo.insert(content_from(req)?).await?;

    tracing::info!(feature_id = %feature.id, "Feature created");

    Ok((StatusCode::CREATED, Json(feature)))
}

/// GET /api/features
pub async fn list_features<R>(
    State(state): State<FeatureAppState<R>>,
) -> FeatureResult<Json<Vec<Feature>>>
where
    R: FeatureRepository + Clone + Send + Sync + 'static,
{
    Ok(Json(state.repo.find_all().await?))
}

/// GET /api/features/{id}
pub async fn get_feature<R>(
    State(state): State<FeatureAppState<R>>,
    Path(id): Path<i64>,
) -> FeatureResult<Json<Feature>>
where
    R: FeatureRepository + Clone + Send + Sync + 'static,
{
    let feature = state
        .repo
        .find_by_id(FeatureId::from_db(id))
        .await?
        .ok_or(FeatureError::NotFound)?;

    Ok(Json(feature))
}

/// PUT /api/features/{id}
pub async fn update_feature<R>(
    State(state): State<FeatureAppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<FeatureRequest>,
) -> FeatureResult<Json<Feature>>
where
    R: FeatureRepository + Clone + Send + Sync + 'static,
{
    let feature = state
        .repo
        .update(FeatureId::from_db(id), content_from(req)?)
        .await?
        .ok_or(FeatureError::NotFound)?;

    Ok(Json(feature))
}

/// DELETE /api/features/{id}
pub async fn delete_feature<R>(
    State(state): State<FeatureAppState<R>>,
    Path(id): Path<i64>,
) -> FeatureResult<Json<MessageResponse>>
where
    R: FeatureRepository + Clone + Send + Sync + 'static,
{
    if !state.repo.delete(FeatureId::from_db(id)).await? {
        return Err(FeatureError::NotFound);
    }

    tracing::info!(feature_id = id, "Feature deleted");

    Ok(Json(MessageResponse {
        message: "Feature deleted".to_string(),
    }))
}
