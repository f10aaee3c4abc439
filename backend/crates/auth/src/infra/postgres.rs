//! PostgreSQL Repository Implementation

use kernel::id::AdminId;
use platform::password::HashedPassword;
use sqlx::PgPool;

use crate::domain::entity::{Admin, NewAdmin};
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed admin credential repository
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AdminRepository for PgAdminRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT
                id,
                name,
                email,
                password_hash,
                age
            FROM admin
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_admin()).transpose()
    }

    async fn insert(&self, admin: NewAdmin) -> AuthResult<Admin> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            INSERT INTO admin (name, email, password_hash, age)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, age
            "#,
        )
        .bind(&admin.name)
        .bind(admin.email.as_str())
        .bind(admin.password_hash.as_str())
        .bind(admin.age)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // Losing side of a registration race: the pre-check passed
            // but the UNIQUE constraint did not.
            sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::EmailTaken,
            _ => AuthError::from(e),
        })?;

        row.into_admin()
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AdminRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    age: Option<i32>,
}

impl AdminRow {
    fn into_admin(self) -> AuthResult<Admin> {
        let password_hash = HashedPassword::from_stored(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("corrupt stored hash: {e}")))?;

        Ok(Admin {
            id: AdminId::from_db(self.id),
            name: self.name,
            email: Email::from_db(self.email),
            password_hash,
            age: self.age,
        })
    }
}
