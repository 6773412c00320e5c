//! Buffs, debuffs, and the XP award resolver
//!
//! Modifiers scale every XP award while active. Buffs multiply the
//! amount up, debuffs multiply it down; all active modifiers stack
//! multiplicatively, so application order does not matter.

use serde::{Deserialize, Serialize};

/// An XP-boosting modifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buff {
    /// Catalog slug, or a generated id for ad-hoc item buffs
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Short human-readable description of what the buff does
    pub effect: String,
    pub active: bool,
    pub multiplier: f64,
}

/// An XP-reducing modifier
///
/// A penalty of 0 marks a purely informational debuff (e.g. the
/// missed-day marker) that does not scale awards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debuff {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub effect: String,
    pub active: bool,
    /// Fraction below 1, e.g. 0.8 for a 20% reduction
    pub penalty: f64,
}

/// Resolve the final XP for an award of `base` under the given modifiers
///
/// Every active buff multiplier and every active nonzero debuff penalty
/// is applied, then the result is rounded to the nearest integer.
/// Negative and zero base amounts are legal inputs.
pub fn resolve_xp(base: f64, buffs: &[Buff], debuffs: &[Debuff]) -> i64 {
    let mut amount = base;
    for buff in buffs.iter().filter(|b| b.active) {
        amount *= buff.multiplier;
    }
    for debuff in debuffs.iter().filter(|d| d.active && d.penalty > 0.0) {
        amount *= debuff.penalty;
    }
    amount.round() as i64
}
