//! Data models for grocery items and archived batches

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single grocery item on the active list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    /// Unique identifier
    pub id: Uuid,
    /// Item name as entered (non-empty, trimmed)
    pub name: String,
    /// Quantity to buy (at least 1)
    pub quantity: u32,
    /// Unit of measure
    pub unit: String,
    /// Category bucket for grouping
    pub category: String,
    /// Expected price (0 when unknown)
    pub price: f64,
    /// Whether the item has been checked off
    pub is_checked: bool,
    /// Optional free-form notes
    pub notes: Option<String>,
    /// When the item was created
    pub created_at: DateTime<Utc>,
    /// Last time the item was modified
    pub updated_at: DateTime<Utc>,
}

impl GroceryItem {
    /// Create a new unchecked item with default quantity/unit/category/price
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity: 1,
            unit: "piece".to_string(),
            category: "uncategorized".to_string(),
            price: 0.0,
            is_checked: false,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the updated timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A batch of items archived together, immutable once created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedList {
    /// Unique identifier
    pub id: Uuid,
    /// When the batch was archived
    pub timestamp: DateTime<Utc>,
    /// Snapshot of the items at archive time
    pub items: Vec<GroceryItem>,
}

impl ArchivedList {
    /// Create a new archived batch from a snapshot of checked items
    pub fn new(items: Vec<GroceryItem>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            items,
        }
    }
}

/// Full list state: active items plus archive history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryState {
    /// Active items in insertion order
    pub items: Vec<GroceryItem>,
    /// Archived batches, most recent first
    pub archived: Vec<ArchivedList>,
}
