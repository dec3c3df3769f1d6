//! Wish list domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::models::{ser_status_code, EntityId, RecordStatus, UserId, WireRecord};
use crate::utils::wire::{de_decimal, de_id, de_opt_date, de_opt_id, de_string, Spellings};

/// How badly the user wants an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => s.parse().unwrap_or_default(),
            _ => Priority::default(),
        })
    }
}

/// Domain model representing a wish-list item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wish {
    #[serde(rename = "WishID", alias = "wishId", default, deserialize_with = "de_id")]
    pub id: EntityId,
    #[serde(rename = "UserID", alias = "userId", default, deserialize_with = "de_opt_id")]
    pub user_id: Option<UserId>,
    #[serde(rename = "ItemName", alias = "itemName", default, deserialize_with = "de_string")]
    pub item_name: String,
    #[serde(
        rename = "EstimatedCost",
        alias = "estimatedCost",
        default,
        deserialize_with = "de_decimal"
    )]
    pub estimated_cost: Decimal,
    #[serde(rename = "Priority", alias = "priority", default)]
    pub priority: Priority,
    #[serde(rename = "TargetDate", alias = "targetDate", default, deserialize_with = "de_opt_date")]
    pub target_date: Option<NaiveDate>,
    #[serde(rename = "Status", alias = "status", default)]
    pub status: RecordStatus,
    #[serde(rename = "CreatedAt", alias = "createdAt", default, deserialize_with = "de_opt_date")]
    pub created_at: Option<NaiveDate>,
    #[serde(rename = "UpdatedAt", alias = "updatedAt", default, deserialize_with = "de_opt_date")]
    pub updated_at: Option<NaiveDate>,
}

/// Body of AddWish.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NewWish {
    pub item_name: String,
    pub estimated_cost: Decimal,
    pub priority: Priority,
    pub target_date: Option<NaiveDate>,
    #[serde(serialize_with = "ser_status_code")]
    pub status: RecordStatus,
}

/// Body of MarkWishCompleted.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WishRef {
    #[serde(rename = "WishID")]
    pub id: EntityId,
}

/// What GetAllWishes returned: the rows plus the server total, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishListing {
    pub wishes: Vec<Wish>,
    pub reported_total: Option<Decimal>,
}

/// Wishes split into the active and the completed list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishList {
    pub active: Vec<Wish>,
    pub completed: Vec<Wish>,
    /// Server total when it sent a non-zero one, else the sum of active costs.
    pub total_estimated_cost: Decimal,
}

impl WishList {
    pub fn from_listing(listing: WishListing) -> Self {
        let (active, completed): (Vec<Wish>, Vec<Wish>) = listing
            .wishes
            .into_iter()
            .partition(|w| w.status.is_active());
        let total_estimated_cost = match listing.reported_total {
            Some(total) if !total.is_zero() => total,
            _ => active.iter().map(|w| w.estimated_cost).sum(),
        };
        Self {
            active,
            completed,
            total_estimated_cost,
        }
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WireRecord for Wish {
    const SPELLINGS: Spellings = &[
        &["WishID", "wishId"],
        &["UserID", "userId"],
        &["ItemName", "itemName"],
        &["EstimatedCost", "estimatedCost"],
        &["Priority", "priority"],
        &["TargetDate", "targetDate"],
        &["Status", "status"],
        &["CreatedAt", "createdAt"],
        &["UpdatedAt", "updatedAt"],
    ];
}
