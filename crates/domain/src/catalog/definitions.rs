//! Catalog definition records.

use serde::{Deserialize, Serialize};

use crate::common::{lenient_bool, lenient_f64};

/// Which sheet section an ability belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AbilityCategory {
    Characteristic,
    Skill,
    Perk,
    Talent,
    MartialManeuver,
    #[default]
    Power,
}

/// A mutually exclusive choice that replaces an ability's base cost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionDefinition {
    pub id: String,
    pub display: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub base_cost: f64,
}

impl OptionDefinition {
    pub fn new(id: impl Into<String>, display: impl Into<String>, base_cost: f64) -> Self {
        Self {
            id: id.into(),
            display: display.into(),
            base_cost,
        }
    }
}

/// An adder the catalog offers for an ability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdderDefinition {
    pub id: String,
    pub display: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub base_cost: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub lvl_cost: f64,
}

/// One ability's pricing rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbilityDefinition {
    pub id: String,
    pub display: String,
    pub category: AbilityCategory,
    #[serde(deserialize_with = "lenient_f64")]
    pub base_cost: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub lvl_cost: f64,
    pub options: Vec<OptionDefinition>,
    pub adders: Vec<AdderDefinition>,
    /// Container power whose slots carry a parent link to it
    #[serde(deserialize_with = "lenient_bool")]
    pub framework: bool,
}

impl AbilityDefinition {
    pub fn new(id: impl Into<String>, display: impl Into<String>, category: AbilityCategory) -> Self {
        Self {
            id: id.into(),
            display: display.into(),
            category,
            ..Self::default()
        }
    }

    pub fn with_base_cost(mut self, base_cost: f64) -> Self {
        self.base_cost = base_cost;
        self
    }

    pub fn with_lvl_cost(mut self, lvl_cost: f64) -> Self {
        self.lvl_cost = lvl_cost;
        self
    }

    pub fn with_option(mut self, option: OptionDefinition) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_adder(mut self, adder: AdderDefinition) -> Self {
        self.adders.push(adder);
        self
    }

    pub fn as_framework(mut self) -> Self {
        self.framework = true;
        self
    }

    pub fn option(&self, id: &str) -> Option<&OptionDefinition> {
        self.options.iter().find(|o| o.id.eq_ignore_ascii_case(id))
    }

    pub fn adder(&self, id: &str) -> Option<&AdderDefinition> {
        self.adders.iter().find(|a| a.id.eq_ignore_ascii_case(id))
    }
}

/// A choice within a modifier that replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModifierOption {
    pub id: String,
    pub display: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub value: f64,
}

impl ModifierOption {
    pub fn new(id: impl Into<String>, display: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            display: display.into(),
            value,
        }
    }
}

/// An advantage or limitation as the catalog defines it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModifierDefinition {
    pub id: String,
    pub display: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub value: f64,
    pub options: Vec<ModifierOption>,
    /// Categories the modifier may attach to; empty means any
    pub applies_to: Vec<AbilityCategory>,
}

impl ModifierDefinition {
    pub fn new(id: impl Into<String>, display: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            display: display.into(),
            value,
            ..Self::default()
        }
    }

    pub fn with_option(mut self, option: ModifierOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn restricted_to(mut self, category: AbilityCategory) -> Self {
        self.applies_to.push(category);
        self
    }

    pub fn option(&self, id: &str) -> Option<&ModifierOption> {
        self.options.iter().find(|o| o.id.eq_ignore_ascii_case(id))
    }

    pub fn applies_to(&self, category: AbilityCategory) -> bool {
        self.applies_to.is_empty() || self.applies_to.contains(&category)
    }

    /// Positive definitions are advantages.
    pub fn is_advantage(&self) -> bool {
        self.value > 0.0
    }
}
