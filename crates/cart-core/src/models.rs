//! Cart Models
//!
//! Data structures matching the REST backend.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier shared by inventory and cart entries.
///
/// A cart entry carries the id of the inventory item it was created from.
/// DOM `data-id` strings are parsed into this once, where the event arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ItemId)
    }
}

/// Catalog entry (matches backend `/inventory`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub content: String,
}

/// Cart entry (matches backend `/cart`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    pub content: String,
    pub amount: u32,
}

impl CartItem {
    /// New cart entry for an inventory item with the given amount
    pub fn from_inventory(item: &InventoryItem, amount: u32) -> Self {
        Self {
            id: item.id,
            content: item.content.clone(),
            amount,
        }
    }

    /// Row label, e.g. `Apple (2)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.content, self.amount)
    }
}
