//! Per-kind emitters for powers on the sheet.

use crate::entities::{Power, PowerKind};
use crate::value_objects::{Stat, StatModification};

/// Levels at which Growth costs a point of DCV.
pub const GROWTH_DCV_THRESHOLDS: [i32; 2] = [6, 12];

/// Source label for a bonus folded into a compound parent.
pub fn compound_source(parent: &str) -> String {
    format!("{parent} (compound)")
}

/// Accumulates modifications from a single source, dropping zero amounts.
#[derive(Debug)]
pub(crate) struct Emission {
    source: String,
    modifications: Vec<StatModification>,
}

impl Emission {
    pub(crate) fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            modifications: Vec::new(),
        }
    }

    pub(crate) fn emit(mut self, stat: Stat, amount: i32) -> Self {
        if amount != 0 {
            self.modifications
                .push(StatModification::new(self.source.clone(), stat, amount));
        }
        self
    }

    /// Emit only when `gate` holds.
    pub(crate) fn emit_if(self, gate: bool, stat: Stat, amount: i32) -> Self {
        if gate {
            self.emit(stat, amount)
        } else {
            self
        }
    }

    pub(crate) fn finish(self) -> Vec<StatModification> {
        self.modifications
    }
}

/// A characteristic bought as a power, attributed to `parent` when the
/// power sits inside a compound.
pub fn characteristic_bonus(power: &Power, stat: Stat, parent: Option<&str>) -> Vec<StatModification> {
    let source = parent.map_or_else(|| power.name().to_string(), compound_source);
    Emission::new(source)
        .emit_if(power.affects_primary(), stat, power.levels())
        .finish()
}

fn growth_dcv_penalty(levels: i32) -> i32 {
    -(GROWTH_DCV_THRESHOLDS
        .iter()
        .filter(|&&threshold| levels >= threshold)
        .count() as i32)
}

/// Every modification one power grants.
///
/// Multiplied amounts saturate at the `i32` bounds. `parent` is the display name of a containing power, if the power's
/// `parentId` resolves to one. Unrecognized powers emit nothing.
pub fn power_modifications(power: &Power, parent: Option<&str>) -> Vec<StatModification> {
    let levels = power.levels();
    let primary = power.affects_primary();
    let total = power.affects_total();

    match power.kind() {
        PowerKind::Characteristic(stat) => characteristic_bonus(power, stat, parent),
        PowerKind::DensityIncrease => Emission::new(power.name())
            .emit_if(primary, Stat::Str, levels.saturating_mul(5))
            .emit_if(primary, Stat::Pd, levels)
            .emit_if(primary, Stat::Ed, levels)
            .emit_if(primary, Stat::Mass, levels.saturating_mul(100))
            .finish(),
        PowerKind::Growth => Emission::new(power.name())
            .emit_if(primary, Stat::Str, levels.saturating_mul(5))
            .emit_if(primary, Stat::Con, levels)
            .emit_if(primary, Stat::Pd, levels)
            .emit_if(primary, Stat::Ed, levels)
            .emit_if(primary, Stat::Body, levels)
            .emit_if(primary, Stat::Stun, levels.saturating_mul(2))
            .emit(Stat::Dcv, growth_dcv_penalty(levels))
            .finish(),
        PowerKind::Shrinking => Emission::new(power.name())
            .emit_if(primary, Stat::Dcv, levels.div_euclid(3))
            .emit_if(primary, Stat::Perception, levels.saturating_mul(-2))
            .finish(),
        PowerKind::ResistantProtection {
            pd_levels,
            ed_levels,
        } => Emission::new(power.name())
            .emit_if(total, Stat::ResistantPd, pd_levels.unwrap_or(levels))
            .emit_if(total, Stat::ResistantEd, ed_levels.unwrap_or(levels))
            .finish(),
        PowerKind::SingleStat(stat) => Emission::new(power.name())
            .emit_if(total, stat, levels)
            .finish(),
        PowerKind::Unrecognized => Vec::new(),
    }
}
