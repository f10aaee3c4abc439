//! PostgreSQL Repository Implementation

use kernel::id::FeatureId;
use sqlx::PgPool;

use crate::domain::entity::{Feature, FeatureContent};
use crate::domain::repository::FeatureRepository;
use crate::error::FeatureResult;

/// PostgreSQL-backed feature repository
#[derive(Clone)]
pub struct PgFeatureRepository {
    pool: PgPool,
}

impl PgFeatureRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl FeatureRepository for PgFeatureRepository {
    async fn insert(&self, content: FeatureContent) -> FeatureResult<Feature> {
        let row = sqlx::query_as::<_, FeatureRow>(
            r#"
            INSERT INTO feature (heading, description)
            VALUES ($1, $2)
            RETURNING id, heading, description
            "#,
        )
        .bind(&content.heading)
        .bind(&content.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_feature())
    }

    async fn find_all(&self) -> FeatureResult<Vec<Feature>> {
        let rows = sqlx::query_as::<_, FeatureRow>(
            r#"
            SELECT id, heading, description
            FROM feature
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FeatureRow::into_feature).collect())
    }

    async fn find_by_id(&self, id: FeatureId) -> FeatureResult<Option<Feature>> {
        let row = sqlx::query_as::<_, FeatureRow>(
            r#"
            SELECT id, heading, description
            FROM feature
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(FeatureRow::into_feature))
    }

    async fn update(
        &self,
        id: FeatureId,
        content: FeatureContent,
    ) -> FeatureResult<Option<Feature>> {
        let row = sqlx::query_as::<_, FeatureRow>(
            r#"
            UPDATE feature
            SET heading = $2, description = $3
            WHERE id = $1
            RETURNING id, heading, description
            "#,
        )
        .bind(id.value())
        .bind(&content.heading)
        .bind(&content.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(FeatureRow::into_feature))
    }

    async fn delete(&self, id: FeatureId) -> FeatureResult<bool> {
        let deleted = sqlx::query("DELETE FROM feature WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct FeatureRow {
    id: i64,
    heading: String,
    description: Option<String>,
}

impl FeatureRow {
    fn into_feature(self) -> Feature {
        Feature {
            id: FeatureId::from_db(self.id),
            heading: self.heading,
            description: self.description,
        }
    }
}
