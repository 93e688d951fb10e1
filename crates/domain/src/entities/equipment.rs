//! Equipment entity - carried gear, possibly built from sub-powers.

use serde::{Deserialize, Serialize};

use super::power::Power;
use super::priced::{Priced, PricedEntity};
use crate::common::lenient_bool;

/// Item names that mark a legacy (non-compound) item as defensive gear.
const DEFENSIVE_ITEM_FRAGMENTS: [&str; 3] = ["armor", "protection", "shield"];

/// An item of equipment.
///
/// Compound items list their abilities in `sub_powers`; legacy items are a
/// single priced entity whose name hints at what it does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    #[serde(flatten)]
    pub entity: PricedEntity,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub carried: bool,
    #[serde(default)]
    pub sub_powers: Vec<Power>,
}

impl Equipment {
    pub fn new(entity: PricedEntity) -> Self {
        Self {
            entity,
            carried: false,
            sub_powers: Vec::new(),
        }
    }

    pub fn carried(mut self) -> Self {
        self.carried = true;
        self
    }

    pub fn with_sub_power(mut self, power: Power) -> Self {
        self.sub_powers.push(power);
        self
    }

    pub fn name(&self) -> &str {
        &self.entity.name
    }

    pub fn is_compound(&self) -> bool {
        !self.sub_powers.is_empty()
    }

    /// A non-compound item with a nonzero active cost whose name reads as
    /// armor, protection, or a shield.
    pub fn is_legacy_defensive(&self) -> bool {
        if self.is_compound() || self.entity.active_cost.unwrap_or(0.0) == 0.0 {
            return false;
        }
        let name = self.entity.name.to_lowercase();
        DEFENSIVE_ITEM_FRAGMENTS
            .iter()
            .any(|fragment| name.contains(fragment))
    }

    /// Defense levels of a legacy item (absent levels mean one).
    pub fn legacy_defense_levels(&self) -> i32 {
        self.entity.levels.unwrap_or(1)
    }
}

impl Priced for Equipment {
    fn priced(&self) -> &PricedEntity {
        &self.entity
    }

    fn priced_mut(&mut self) -> &mut PricedEntity {
        &mut self.entity
    }
}
