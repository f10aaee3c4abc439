//! Admin Entity and Public Profile Projection

use kernel::id::AdminId;
use platform::password::HashedPassword;
use serde::Serialize;

use crate::domain::value_object::Email;

/// Admin credential record
///
/// Owned exclusively by the credential store; create-then-read-only
/// (no update or delete operation exists for credentials).
///
/// Deliberately not serializable: the only way fields reach a response
/// is through [`AdminProfile`], which carries no hash.
#[derive(Debug, Clone)]
pub struct Admin {
    /// Store-assigned surrogate key, immutable
    pub id: AdminId,
    /// Display name, informational
    pub name: String,
    /// Unique across all records
    pub email: Email,
    /// bcrypt hash; never leaves the store boundary
    pub password_hash: HashedPassword,
    pub age: Option<i32>,
}

/// Admin record as handed to the store for insertion (no id yet)
#[derive(Debug)]
pub struct NewAdmin {
    pub name: String,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub age: Option<i32>,
}

/// Public profile - the subset of a credential record safe to expose
///
/// Total projection; never fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: AdminId,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

impl From<&Admin> for AdminProfile {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            name: admin.name.clone(),
            email: admin.email.as_str().to_string(),
            age: admin.age,
        }
    }
}
