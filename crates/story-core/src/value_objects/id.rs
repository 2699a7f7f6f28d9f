//! EntityId - 64-bit row identifier for users, books, and chapters
//!
//! Identifiers are positive integers assigned by the database. They are
//! serialized as JSON strings (JavaScript clients cannot represent the
//! full i64 range) but accepted as either strings or numbers on input.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Positive integer identifier for a domain entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EntityId(i64);

impl EntityId {
    /// Create a new EntityId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check whether the id is a valid (positive) identifier
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parse from string representation, rejecting non-positive values
    pub fn parse(s: &str) -> Result<Self, EntityIdParseError> {
        let raw = s
            .parse::<i64>()
            .map_err(|_| EntityIdParseError::InvalidFormat)?;
        if raw <= 0 {
            return Err(EntityIdParseError::NotPositive);
        }
        Ok(Self(raw))
    }
}

/// Error when parsing an EntityId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EntityIdParseError {
    #[error("invalid id format")]
    InvalidFormat,
    #[error("id must be a positive integer")]
    NotPositive,
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EntityId> for i64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl std::str::FromStr for EntityId {
    type Err = EntityIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityId::parse(s)
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = EntityId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer id as a number or string")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(EntityId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i64::try_from(value)
                    .map(EntityId)
                    .map_err(|_| E::custom("id out of range"))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<i64>()
                    .map(EntityId)
                    .map_err(|_| E::custom("invalid id string"))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}
