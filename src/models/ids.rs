//! Transaction identifiers
//!
//! New ids are random UUIDs, so they stay unique across every transaction
//! ever created, including ones that were later deleted. Ids found in older
//! data that are not UUIDs (millisecond timestamps, for instance) are kept
//! verbatim as opaque strings.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "txn-";

/// Unique, immutable identifier of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionId {
    Uuid(Uuid),
    /// Opaque id carried over from older data
    Legacy(String),
}

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self::Uuid(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self::Uuid(uuid)
    }

    /// Read a stored id, keeping anything that is not a UUID as-is
    pub fn from_stored(raw: &str) -> Self {
        match Uuid::parse_str(raw) {
            Ok(uuid) => Self::Uuid(uuid),
            Err(_) => Self::Legacy(raw.to_string()),
        }
    }

    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(uuid) => Some(uuid),
            Self::Legacy(_) => None,
        }
    }

    /// Full stored form: the hyphenated UUID or the legacy string
    pub fn canonical(&self) -> String {
        match self {
            Self::Uuid(uuid) => uuid.to_string(),
            Self::Legacy(raw) => raw.clone(),
        }
    }

    /// Whether `query` names this id by a leading fragment
    ///
    /// Accepts the display form (`txn-1a2b3c4d`), a bare prefix, or the
    /// full stored id.
    pub fn matches_prefix(&self, query: &str) -> bool {
        let query = query.trim();
        let query = query.strip_prefix(DISPLAY_PREFIX).unwrap_or(query);
        if query.is_empty() {
            return false;
        }
        match self {
            Self::Uuid(uuid) => uuid.to_string().starts_with(&query.to_ascii_lowercase()),
            Self::Legacy(raw) => raw.starts_with(query),
        }
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uuid(uuid) => write!(f, "{}{}", DISPLAY_PREFIX, &uuid.to_string()[..8]),
            Self::Legacy(raw) => write!(f, "{}{}", DISPLAY_PREFIX, raw),
        }
    }
}

impl From<Uuid> for TransactionId {
    fn from(uuid: Uuid) -> Self {
        Self::Uuid(uuid)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    /// Parse a full UUID, with or without the display prefix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self::Uuid(Uuid::parse_str(s)?))
    }
}

impl Serialize for TransactionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical())
    }
}

struct TransactionIdVisitor;

impl<'de> Visitor<'de> for TransactionIdVisitor {
    type Value = TransactionId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a transaction id string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.is_empty() {
            return Err(E::custom("transaction id cannot be empty"));
        }
        Ok(TransactionId::from_stored(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(TransactionId::Legacy(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(TransactionId::Legacy(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TransactionIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = TransactionId::new();
        let display = id.to_string();
        assert!(display.starts_with("txn-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = TransactionId::new();
        let b = TransactionId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let plain: TransactionId = uuid_str.parse().unwrap();
        let prefixed: TransactionId = format!("txn-{}", uuid_str).parse().unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.canonical(), uuid_str);
    }

    #[test]
    fn test_matches_prefix() {
        let id: TransactionId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert!(id.matches_prefix("txn-550e8400"));
        assert!(id.matches_prefix("550E84"));
        assert!(id.matches_prefix("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!id.matches_prefix("txn-"));
        assert!(!id.matches_prefix("660e"));
    }

    #[test]
    fn test_serialization_is_plain_uuid() {
        let id: TransactionId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");
    }

    #[test]
    fn test_timestamp_ids_are_kept_verbatim() {
        let id: TransactionId = serde_json::from_str("\"1709251200000\"").unwrap();
        assert_eq!(id, TransactionId::Legacy("1709251200000".into()));
        assert_eq!(id.to_string(), "txn-1709251200000");
        assert!(id.matches_prefix("txn-17092"));
        assert!(id.as_uuid().is_none());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1709251200000\"");

        let numeric: TransactionId = serde_json::from_str("1709251200000").unwrap();
        assert_eq!(numeric, id);

        assert!(serde_json::from_str::<TransactionId>("\"\"").is_err());
    }
}
