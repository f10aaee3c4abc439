//! Feature Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::FeatureRepository;
use crate::infra::postgres::PgFeatureRepository;
use crate::presentation::handlers::{self, FeatureAppState};

/// Create the Feature router with the PostgreSQL repository
pub fn feature_router(repo: PgFeatureRepository) -> Router {
    feature_router_generic(repo)
}

/// Create a Feature router for any repository implementation
pub fn feature_router_generic<R>(repo: R) -> Router
where
    R: FeatureRepository + Clone + Send + Sync + 'static,
{
    let state = FeatureAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_features::<R>).post(handlers::create_feature::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_feature::<R>)
                .put(handlers::update_feature::<R>)
                .delete(handlers::delete_feature::<R>),
        )
        .with_state(state)
}
