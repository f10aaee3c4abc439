//! Password Hashing and Verification
//!
//! Adaptive password handling with:
//! - bcrypt hashing (tunable cost factor, salt generated internally)
//! - Zeroization of cleartext passwords
//! - Constant-time comparison on verification
//!
//! The cost factor is the single tunable: raising it makes brute-force
//! attacks proportionally more expensive as hardware improves.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Default bcrypt cost factor (2^10 rounds)
pub const DEFAULT_HASH_COST: u32 = 10;

/// Lowest cost bcrypt accepts
pub const MIN_HASH_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_HASH_COST: u32 = 31;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("password must be at least {min} characters")]
    TooShort { min: usize, actual: usize },

    /// Password is empty or whitespace only
    #[error("password cannot be empty")]
    Empty,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing or verification failed inside bcrypt
    #[error("Password hashing failed: {0}")]
    HashingFailed(#[from] bcrypt::BcryptError),

    /// Stored value is not a bcrypt hash
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Raw Password (Zeroized on drop)
// ============================================================================

/// Cleartext password with automatic memory zeroization
///
/// The value is erased from memory on drop. Does not implement `Clone`,
/// and `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct RawPassword(String);

impl RawPassword {
    /// Create a new raw password with policy validation
    ///
    /// Length is counted in Unicode code points, not bytes.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.trim().is_empty() {
            return Err(PasswordPolicyError::Empty);
        }

        let char_count = raw.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(raw))
    }

    /// Create without validation (tests only)
    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    fn as_str(&self) -> &str {
        &self.0
    }

    /// Hash the password with bcrypt
    ///
    /// The salt is generated internally and embedded in the output string.
    /// `cost` is clamped to the range bcrypt accepts. bcrypt reads at most
    /// 72 input bytes.
    pub fn hash(&self, cost: u32) -> Result<HashedPassword, PasswordHashError> {
        let cost = cost.clamp(MIN_HASH_COST, MAX_HASH_COST);
        let hash = bcrypt::hash(self.as_str(), cost)?;
        Ok(HashedPassword { hash })
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// bcrypt password hash in modular crypt format
///
/// Safe to persist; the cost and salt are embedded in the string. The
/// cleartext is not derivable from it in reasonable time.
///
/// ## Examples
/// ```rust
/// use platform::password::{RawPassword, MIN_HASH_COST};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let password = RawPassword::new("secret123".to_string())?;
/// let hashed = password.hash(MIN_HASH_COST)?;
/// assert!(hashed.verify(&password)?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a stored value (e.g. from the database)
    pub fn from_stored(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        // All bcrypt variants ($2a$, $2b$, $2x$, $2y$) share the prefix
        if !hash.starts_with("$2") {
            return Err(PasswordHashError::InvalidHashFormat);
        }

        Ok(Self { hash })
    }

    /// Get the hash string for storage
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// bcrypt re-derives the hash with the embedded salt and compares in
    /// constant time; never compare hash strings with `==`.
    pub fn verify(&self, password: &RawPassword) -> Result<bool, PasswordHashError> {
        Ok(bcrypt::verify(password.as_str(), &self.hash)?)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        let result = RawPassword::new("five5".to_string());
        assert!(matches!(
            result,
            Err(PasswordPolicyError::TooShort { min: 6, actual: 5 })
        ));
    }

    #[test]
    fn test_password_empty() {
        let result = RawPassword::new("".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::Empty)));

        let result = RawPassword::new("      ".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::Empty)));
    }

    #[test]
    fn test_length_counts_code_points() {
        // 6 characters, more than 6 bytes
        let result = RawPassword::new("パスワード安全".to_string());
        assert!(result.is_ok());
    }

    #[test]
    fn test_minimum_length_accepted() {
        assert!(RawPassword::new("sixsix".to_string()).is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = RawPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash(MIN_HASH_COST).unwrap();

        assert!(hashed.verify(&password).unwrap());

        let wrong = RawPassword::new_unchecked("WrongPassword123!".to_string());
        assert!(!hashed.verify(&wrong).unwrap());
    }

    #[test]
    fn test_hash_embeds_salt() {
        let password = RawPassword::new_unchecked("TestPassword123!".to_string());
        let a = password.hash(MIN_HASH_COST).unwrap();
        let b = password.hash(MIN_HASH_COST).unwrap();

        // Same cleartext, fresh salt, different hash
        assert_ne!(a.as_str(), b.as_str());
        assert!(a.verify(&password).unwrap());
        assert!(b.verify(&password).unwrap());
    }

    #[test]
    fn test_hash_is_not_the_cleartext() {
        let password = RawPassword::new_unchecked("secret123".to_string());
        let hashed = password.hash(MIN_HASH_COST).unwrap();
        assert_ne!(hashed.as_str(), "secret123");
        assert!(hashed.as_str().starts_with("$2"));
    }

    #[test]
    fn test_cost_is_clamped() {
        let password = RawPassword::new_unchecked("secret123".to_string());
        // 0 would be rejected by bcrypt; clamping makes it MIN_HASH_COST
        let hashed = password.hash(0).unwrap();
        assert!(hashed.verify(&password).unwrap());
    }

    #[test]
    fn test_stored_roundtrip() {
        let password = RawPassword::new_unchecked("TestPassword123!".to_string());
        let hashed = password.hash(MIN_HASH_COST).unwrap();

        let stored = hashed.as_str().to_string();
        let restored = HashedPassword::from_stored(stored).unwrap();

        assert!(restored.verify(&password).unwrap());
    }

    #[test]
    fn test_invalid_stored_hash() {
        let result = HashedPassword::from_stored("not_a_valid_hash");
        assert!(matches!(result, Err(PasswordHashError::InvalidHashFormat)));
    }

    #[test]
    fn test_debug_redaction() {
        let password = RawPassword::new_unchecked("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = password.hash(MIN_HASH_COST).unwrap();
        let debug_output = format!("{:?}", hashed);
        assert!(!debug_output.contains(hashed.as_str()));
    }
}
