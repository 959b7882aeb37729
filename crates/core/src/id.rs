//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a product record.
///
/// Session-scoped and issued by an [`IdSequence`]. It renders (and
/// serializes) as a plain decimal string, e.g. `"1"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u64);

impl ProductId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {s:?}: {e}")))?;
        if raw == 0 {
            return Err(DomainError::invalid_id("ProductId: ids start at 1"));
        }
        Ok(Self(raw))
    }
}

impl Serialize for ProductId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Monotonic source of [`ProductId`]s for one session.
///
/// Ids are never derived from the current list length, so removing a record
/// and adding another can't hand out an id that is still held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Issue the next id.
    pub fn next_id(&mut self) -> ProductId {
        let id = ProductId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier of an app session (one store lifetime).
///
/// UUIDv7, so ids sort by the time the session started.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SessionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one_and_increments() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.next_id().to_string(), "1");
        assert_eq!(seq.next_id().to_string(), "2");
        assert_eq!(seq.next_id(), ProductId::from_raw(3));
    }

    #[test]
    fn product_id_parses_decimal_strings() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::from_raw(42));
        assert_eq!(" 7 ".parse::<ProductId>().unwrap(), ProductId::from_raw(7));
    }

    #[test]
    fn product_id_rejects_garbage_and_zero() {
        assert!(matches!("abc".parse::<ProductId>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("-1".parse::<ProductId>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("0".parse::<ProductId>(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn product_id_serializes_as_string() {
        let json = serde_json::to_string(&ProductId::from_raw(3)).unwrap();
        assert_eq!(json, "\"3\"");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProductId::from_raw(3));
    }

    #[test]
    fn session_ids_are_distinct_v7_uuids() {
        let a = SessionId::new();
        let b = SessionId::new();
        assert_ne!(a, b);
        let text = a.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(&text[14..15], "7");
    }
}
