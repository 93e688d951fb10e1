//! StatModification and EffectiveCharacteristic - derived stat changes
//!
//! Modifications are never stored on the character document. They are
//! recomputed from the character's powers and equipment every time and carry
//! their provenance so a sheet can show where each bonus came from.

use serde::{Deserialize, Serialize};

use super::Stat;

/// A provenance-tagged change to a named statistic.
///
/// This is an immutable value object. Use builder-style methods to create
/// modified copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatModification {
    /// Where the change comes from (e.g., "Growth", "Power Armor (compound)")
    source: String,
    /// The statistic being changed
    stat: Stat,
    /// The amount to add (positive) or subtract (negative)
    amount: i32,
    /// Whether this modification counts toward totals
    active: bool,
}

impl StatModification {
    /// Create a new active modification.
    pub fn new(source: impl Into<String>, stat: Stat, amount: i32) -> Self {
        Self {
            source: source.into(),
            stat,
            amount,
            active: true,
        }
    }

    /// Create an inactive modification (for tracking but not applying)
    pub fn inactive(source: impl Into<String>, stat: Stat, amount: i32) -> Self {
        Self {
            active: false,
            ..Self::new(source, stat, amount)
        }
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────────

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn stat(&self) -> Stat {
        self.stat
    }

    /// Positive = bonus, negative = penalty.
    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Builder-style methods (consume self, return new instance)
    // ──────────────────────────────────────────────────────────────────────────

    /// Create a copy with the active state changed.
    pub fn with_active(self, active: bool) -> Self {
        Self { active, ..self }
    }
}

/// Sum of the amounts of every active modification targeting `stat`,
/// saturating at the `i32` bounds.
pub fn stat_total(modifications: &[StatModification], stat: Stat) -> i32 {
    modifications
        .iter()
        .filter(|m| m.is_active() && m.stat() == stat)
        .map(StatModification::amount)
        .fold(0, i32::saturating_add)
}

/// A characteristic with its stored value, derived bonus, and effective total.
///
/// This is an immutable value object representing a computed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveCharacteristic {
    /// The stored total from the character document
    base: i32,
    /// Sum of active derived modifications
    bonus: i32,
    /// base + bonus
    effective: i32,
}

impl EffectiveCharacteristic {
    /// The effective value is `base + bonus`, saturating.
    pub fn new(base: i32, bonus: i32) -> Self {
        Self {
            base,
            bonus,
            effective: base.saturating_add(bonus),
        }
    }

    pub fn base(&self) -> i32 {
        self.base
    }

    pub fn bonus(&self) -> i32 {
        self.bonus
    }

    pub fn effective(&self) -> i32 {
        self.effective
    }
}
