//! Shop catalog and inventory

use crate::StatDelta;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rarity tier of a shop item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Category of a shop item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Buff,
    Gear,
    Cosmetic,
    Consumable,
}

/// What an item does when consumed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEffect {
    /// Flat meter boosts applied immediately on use
    pub stat_boost: StatDelta,
    /// Nominal duration in days; purely descriptive
    pub duration_days: u32,
    /// When present and not 1, using the item spawns an ad-hoc XP buff
    pub multiplier: Option<f64>,
}

/// A purchasable definition. The catalog is static and not part of the
/// mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub price: u32,
    pub rarity: Rarity,
    pub effect: String,
    pub category: ItemCategory,
    pub item_effect: Option<ItemEffect>,
}

/// An owned stack of one shop item. Rows live in the inventory map
/// keyed by item id and are pruned when the quantity reaches zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub quantity: u32,
    pub acquired_at: NaiveDate,
}
