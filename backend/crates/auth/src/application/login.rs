//! Login Use Case
//!
//! Authenticates an admin for this request only. No token and no session
//! state are created; persistent sessions are the caller's concern.

use std::sync::Arc;

use platform::password::RawPassword;

use crate::domain::entity::AdminProfile;
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: AdminRepository,
{
    repo: Arc<R>,
}

impl<R> LoginUseCase<R>
where
    R: AdminRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<AdminProfile> {
        if input.email.is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation(
                "email and password are required".to_string(),
            ));
        }

        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        // Unknown email and wrong password must be indistinguishable in
        // the response, so both collapse to InvalidCredentials.
        let admin = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // A password failing local policy can never match a stored hash
        let raw_password = match RawPassword::new(input.password) {
            Ok(p) => p,
            Err(_) => return Err(AuthError::InvalidCredentials),
        };

        // Constant-time comparison inside bcrypt, off the dispatcher
        let hash = admin.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || hash.verify(&raw_password))
            .await
            .map_err(|e| AuthError::Internal(format!("verification task failed: {e}")))??;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(
            admin_id = %admin.id,
            "Admin logged in"
        );

        Ok(AdminProfile::from(&admin))
    }
}
