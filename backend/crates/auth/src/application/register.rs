//! Register Use Case
//!
//! Creates a new admin credential record.

use std::sync::Arc;

use platform::password::RawPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::{AdminProfile, NewAdmin};
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: Option<i32>,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: AdminRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: AdminRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Execute registration.
    ///
    /// Side effect: exactly one new credential record on success, none on
    /// any failure path.
    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AdminProfile> {
        if input.name.is_empty() || input.email.is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation(
                "name, email, password are required".to_string(),
            ));
        }

        // Policy check before any storage call
        let raw_password = RawPassword::new(input.password)?;

        let email = Email::new(input.email).map_err(|e| {
            AuthError::Validation(e.message().to_string())
        })?;

        // Fast path for a friendly 409. Not atomic with the insert; the
        // UNIQUE constraint catches the race and insert() remaps it to
        // the same EmailTaken.
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        // bcrypt is CPU-bound; keep it off the async dispatcher
        let cost = self.config.hash_cost;
        let password_hash = tokio::task::spawn_blocking(move || raw_password.hash(cost))
            .await
            .map_err(|e| AuthError::Internal(format!("hashing task failed: {e}")))??;

        let admin = self
            .repo
            .insert(NewAdmin {
                name: input.name,
                email,
                password_hash,
                age: input.age,
            })
            .await?;

        tracing::info!(
            admin_id = %admin.id,
            "Admin registered"
        );

        Ok(AdminProfile::from(&admin))
    }
}
