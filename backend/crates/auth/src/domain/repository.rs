//! Repository Trait
//!
//! Interface for credential persistence. Implementation is in the
//! infrastructure layer. The core needs exactly two operations; email
//! uniqueness is enforced by the store itself (UNIQUE constraint), the
//! use case's pre-insert lookup is only a fast path.

use crate::domain::entity::{Admin, NewAdmin};
use crate::domain::value_object::Email;
use crate::error::AuthResult;

/// Admin credential repository trait
#[trait_variant::make(AdminRepository: Send)]
pub trait LocalAdminRepository {
    /// Find a record by exact email match (unique or absent)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Admin>>;

    /// Insert a new record; the store assigns the id.
    ///
    /// A unique-constraint violation on email surfaces as
    /// [`AuthError::EmailTaken`](crate::error::AuthError::EmailTaken).
    async fn insert(&self, admin: NewAdmin) -> AuthResult<Admin>;
}
