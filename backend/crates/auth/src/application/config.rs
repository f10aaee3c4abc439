//! Application Configuration

use platform::password::DEFAULT_HASH_COST;

/// Auth application configuration
///
/// The hash cost factor is the single tunable of the credential core.
/// It comes from the process environment (`BCRYPT_ROUNDS`) and is read
/// once at startup by the binary.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// bcrypt cost factor (2^cost rounds)
    pub hash_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            hash_cost: DEFAULT_HASH_COST,
        }
    }
}

impl AuthConfig {
    pub fn new(hash_cost: u32) -> Self {
        Self { hash_cost }
    }
}
