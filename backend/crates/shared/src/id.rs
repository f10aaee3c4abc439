//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. The stores assign ids
//! (BIGSERIAL), so the wrapped value is an `i64` surrogate key.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type AdminId = Id<markers::Admin>;
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create from a store-assigned value
    pub fn from_db(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying value
    pub fn value(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would put bounds on the marker type.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_db(value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_db)
    }
}

/// Marker types for each entity
pub mod markers {
    /// Admin credential record
    pub enum Admin {}
    /// Feature catalog record
    pub enum Feature {}
}

/// Admin credential record id
pub type AdminId = Id<markers::Admin>;
/// Feature catalog record id
pub type FeatureId = Id<markers::Feature>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_ids_compare_by_value() {
        let a = AdminId::from_db(1);
        let b = AdminId::from_db(1);
        let c = AdminId::from_db(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let id = FeatureId::from_db(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");

        let back: FeatureId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_display() {
        assert_eq!(AdminId::from_db(42).to_string(), "42");
    }
}
