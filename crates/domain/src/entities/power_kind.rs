//! Power classification - which derivation rule a power falls under.
//!
//! Classification happens once, when a power is read from the document.
//! It runs two independent passes over plain lookup tables:
//!
//! 1. the declared type code ([`classify_by_type`], [`TYPE_TABLE`])
//! 2. a case-insensitive substring match on the display name
//!    ([`classify_by_name`], [`NAME_TABLE`]) for legacy and custom-labelled entries
//!
//! The first pass that matches wins.

use crate::value_objects::Stat;

/// The rule family a power belongs to, without per-power data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerClass {
    /// Directly buys levels of a characteristic
    Characteristic(Stat),
    DensityIncrease,
    Growth,
    Shrinking,
    /// Resistant Protection, Armor, and Force Field
    ResistantProtection,
    /// Grants `levels` of exactly one stat (defenses, movement)
    SingleStat(Stat),
}

/// Canonical type codes, after characteristic codes.
pub const TYPE_TABLE: &[(&str, PowerClass)] = &[
    ("DENSITYINCREASE", PowerClass::DensityIncrease),
    ("GROWTH", PowerClass::Growth),
    ("SHRINKING", PowerClass::Shrinking),
    ("FORCEFIELD", PowerClass::ResistantProtection),
    ("RESISTANT_PROTECTION", PowerClass::ResistantProtection),
    ("RESISTANTPROTECTION", PowerClass::ResistantProtection),
    ("ARMOR", PowerClass::ResistantProtection),
    ("FLASHDEFENSE", PowerClass::SingleStat(Stat::FlashDefense)),
    ("MENTALDEFENSE", PowerClass::SingleStat(Stat::MentalDefense)),
    ("POWERDEFENSE", PowerClass::SingleStat(Stat::PowerDefense)),
    ("KBRESISTANCE", PowerClass::SingleStat(Stat::KnockbackResistance)),
    ("KNOCKBACKRESISTANCE", PowerClass::SingleStat(Stat::KnockbackResistance)),
    ("FLIGHT", PowerClass::SingleStat(Stat::Flight)),
    ("TELEPORTATION", PowerClass::SingleStat(Stat::Teleportation)),
    ("TELEPORT", PowerClass::SingleStat(Stat::Teleportation)),
];

/// Lower-case name fragments, checked in order.
pub const NAME_TABLE: &[(&str, PowerClass)] = &[
    ("density increase", PowerClass::DensityIncrease),
    ("growth", PowerClass::Growth),
    ("shrinking", PowerClass::Shrinking),
    ("resistant protection", PowerClass::ResistantProtection),
    ("armor", PowerClass::ResistantProtection),
    ("forcefield", PowerClass::ResistantProtection),
    ("force field", PowerClass::ResistantProtection),
    ("flash defense", PowerClass::SingleStat(Stat::FlashDefense)),
    ("mental defense", PowerClass::SingleStat(Stat::MentalDefense)),
    ("power defense", PowerClass::SingleStat(Stat::PowerDefense)),
    (
        "knockback resistance",
        PowerClass::SingleStat(Stat::KnockbackResistance),
    ),
    ("flight", PowerClass::SingleStat(Stat::Flight)),
    ("running", PowerClass::SingleStat(Stat::Running)),
    ("swimming", PowerClass::SingleStat(Stat::Swimming)),
    ("leaping", PowerClass::SingleStat(Stat::Leaping)),
    ("teleport", PowerClass::SingleStat(Stat::Teleportation)),
];

/// First pass: resolve by declared type code.
pub fn classify_by_type(type_code: &str) -> Option<PowerClass> {
    let code = type_code.trim();
    if let Ok(stat) = code.parse::<Stat>() {
        if stat.is_characteristic() {
            return Some(PowerClass::Characteristic(stat));
        }
    }
    TYPE_TABLE
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|(_, class)| *class)
}

/// Second pass: resolve by a fragment of the display name.
pub fn classify_by_name(name: &str) -> Option<PowerClass> {
    let name = name.to_lowercase();
    NAME_TABLE
        .iter()
        .find(|(fragment, _)| name.contains(fragment))
        .map(|(_, class)| *class)
}

/// A power's resolved category, carrying only the fields that category uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerKind {
    Characteristic(Stat),
    DensityIncrease,
    Growth,
    Shrinking,
    ResistantProtection {
        pd_levels: Option<i32>,
        ed_levels: Option<i32>,
    },
    SingleStat(Stat),
    /// Custom or house-rule abilities; derivation skips these
    Unrecognized,
}

impl PowerKind {
    /// Resolve a power's kind from its document fields.
    pub fn resolve(
        type_code: Option<&str>,
        name: &str,
        pd_levels: Option<i32>,
        ed_levels: Option<i32>,
    ) -> Self {
        let class = type_code
            .and_then(classify_by_type)
            .or_else(|| classify_by_name(name));

        match class {
            Some(PowerClass::Characteristic(stat)) => Self::Characteristic(stat),
            Some(PowerClass::DensityIncrease) => Self::DensityIncrease,
            Some(PowerClass::Growth) => Self::Growth,
            Some(PowerClass::Shrinking) => Self::Shrinking,
            Some(PowerClass::ResistantProtection) => Self::ResistantProtection {
                pd_levels,
                ed_levels,
            },
            Some(PowerClass::SingleStat(stat)) => Self::SingleStat(stat),
            None => Self::Unrecognized,
        }
    }

    pub fn is_characteristic(&self) -> bool {
        matches!(self, Self::Characteristic(_))
    }

    pub fn is_resistant_protection(&self) -> bool {
        matches!(self, Self::ResistantProtection { .. })
    }

    /// Short name of the rule family, for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Characteristic(_) => "characteristic",
            Self::DensityIncrease => "densityIncrease",
            Self::Growth => "growth",
            Self::Shrinking => "shrinking",
            Self::ResistantProtection { .. } => "resistantProtection",
            Self::SingleStat(_) => "singleStat",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Explicit PD/ED split, when the kind carries one.
    pub fn defense_levels(&self) -> (Option<i32>, Option<i32>) {
        match self {
            Self::ResistantProtection {
                pd_levels,
                ed_levels,
            } => (*pd_levels, *ed_levels),
            _ => (None, None),
        }
    }
}
