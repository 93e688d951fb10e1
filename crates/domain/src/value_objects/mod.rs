//! Value objects - Immutable objects defined by their attributes

mod dice;
mod rounding;
mod stat;
mod stat_modification;

// Damage dice notation
pub use dice::{DamageDice, DiceParseError};

// Half-rounding policy for costs and effects
pub use rounding::{round_for_cost, round_for_effect};

pub use stat::Stat;
pub use stat_modification::{stat_total, EffectiveCharacteristic, StatModification};
