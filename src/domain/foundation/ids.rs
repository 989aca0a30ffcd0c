//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a WMTI history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WmtiHistoryId(Uuid);

impl WmtiHistoryId {
    /// Creates a new random WmtiHistoryId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a WmtiHistoryId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WmtiHistoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WmtiHistoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WmtiHistoryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Member identifier (the `sub` claim issued by the auth layer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_id_generates_unique_values() {
        let id1 = WmtiHistoryId::new();
        let id2 = WmtiHistoryId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn history_id_parses_from_string() {
        let id = WmtiHistoryId::new();
        let parsed: WmtiHistoryId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn history_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<WmtiHistoryId>().is_err());
    }

    #[test]
    fn user_id_accepts_non_empty_string() {
        let id = UserId::new("member-42").unwrap();
        assert_eq!(id.as_str(), "member-42");
    }

    #[test]
    fn user_id_rejects_blank_string() {
        for raw in ["", "   "] {
            match UserId::new(raw) {
                Err(ValidationError::EmptyField { field }) => assert_eq!(field, "user_id"),
                other => panic!("Expected EmptyField error, got {:?}", other),
            }
        }
    }

    #[test]
    fn user_id_serializes_as_plain_string() {
        let id = UserId::new("member-42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"member-42\"");
    }
}
