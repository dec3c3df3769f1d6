//! Types shared by every resource.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::utils::wire::{collapse_spellings, Spellings};

/// Backend identifier of any record.
pub type EntityId = i64;

/// Backend identifier of a user.
pub type UserId = i64;

/// Soft-delete / completion flag carried by transactions, goals and wishes.
///
/// Transactions spell it `Active`/`Inactive` on the wire, goals and wishes use
/// the single-letter codes `A`/`I`. Both spellings decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }

    /// Single-letter wire code used by the goal and wish endpoints.
    pub fn as_code(&self) -> &'static str {
        match self {
            RecordStatus::Active => "A",
            RecordStatus::Inactive => "I",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "a" | "active" => Some(RecordStatus::Active),
            "i" | "inactive" => Some(RecordStatus::Inactive),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecordStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => RecordStatus::parse(&s).unwrap_or_else(|| {
                log::warn!("Unknown record status '{}', treating as Active", s);
                RecordStatus::Active
            }),
            _ => RecordStatus::Active,
        })
    }
}

/// Serializes a status as its single-letter code (`A`/`I`).
pub fn ser_status_code<S: Serializer>(
    status: &RecordStatus,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(status.as_code())
}

/// A backend record whose fields may arrive under more than one spelling.
pub trait WireRecord: DeserializeOwned {
    /// Every field's accepted keys, primary spelling first.
    const SPELLINGS: Spellings;

    /// Decodes a record, resolving fields sent under several spellings at once.
    fn from_wire(mut value: Value) -> serde_json::Result<Self> {
        if let Value::Object(row) = &mut value {
            collapse_spellings(row, Self::SPELLINGS);
        }
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_decodes_both_spellings() {
        for (raw, expected) in [
            ("\"A\"", RecordStatus::Active),
            ("\"active\"", RecordStatus::Active),
            ("\"I\"", RecordStatus::Inactive),
            ("\"INACTIVE\"", RecordStatus::Inactive),
            ("null", RecordStatus::Active),
        ] {
            let status: RecordStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(status, expected, "decoding {}", raw);
        }
    }

    #[test]
    fn test_status_serializes_long_form() {
        assert_eq!(
            serde_json::to_string(&RecordStatus::Inactive).unwrap(),
            "\"Inactive\""
        );
    }
}
