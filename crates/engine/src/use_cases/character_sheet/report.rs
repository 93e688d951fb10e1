//! Report types returned by the character sheet use cases.

use serde::Serialize;

use pointforge_domain::{
    CostBreakdown, EffectiveCharacteristic, PointsSummary, Power, PricingIssue, Stat,
    StatModification,
};

/// One power as it appears in a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerSummary {
    pub id: Option<String>,
    pub name: String,
    /// Derivation rule family (e.g., "growth", "unrecognized")
    pub kind: &'static str,
    pub active_cost: Option<f64>,
    pub real_cost: Option<f64>,
    /// False when the power's cost is folded into a parent on the sheet
    pub counted: bool,
    /// Normalized dice notation, when the power has readable damage
    pub damage: Option<String>,
    pub average_damage: Option<f64>,
}

impl PowerSummary {
    pub fn from_power(power: &Power, contained: bool) -> Self {
        let dice = power.damage_dice().filter(|dice| !dice.is_none());
        Self {
            id: power.id().map(str::to_string),
            name: power.name().to_string(),
            kind: power.kind().label(),
            active_cost: power.entity().active_cost,
            real_cost: power.entity().real_cost,
            counted: !contained,
            damage: dice.map(|d| d.to_string()),
            average_damage: dice.map(|d| d.average()),
        }
    }
}

/// Everything the engine computes for one character.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetReport {
    pub name: String,
    pub breakdown: CostBreakdown,
    pub points: PointsSummary,
    pub modifications: Vec<StatModification>,
    pub characteristics: Vec<(Stat, EffectiveCharacteristic)>,
    pub powers: Vec<PowerSummary>,
    /// Entities priced with a clamped denominator
    pub issues: Vec<PricingIssue>,
}

impl SheetReport {
    pub fn characteristic(&self, stat: Stat) -> Option<EffectiveCharacteristic> {
        self.characteristics
            .iter()
            .find(|(s, _)| *s == stat)
            .map(|(_, value)| *value)
    }

    pub fn power(&self, name: &str) -> Option<&PowerSummary> {
        self.powers.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_summary_reads_damage() {
        let power = Power::leveled("Fire Bolt", "BLAST", 12)
            .with_id("bolt")
            .with_damage("12d6");
        let summary = PowerSummary::from_power(&power, false);
        assert_eq!(summary.kind, "unrecognized");
        assert_eq!(summary.damage.as_deref(), Some("12d6"));
        assert_eq!(summary.average_damage, Some(42.0));
        assert!(summary.counted);
    }

    #[test]
    fn malformed_damage_is_omitted() {
        let power = Power::leveled("Fizzle", "BLAST", 1).with_damage("lots");
        let summary = PowerSummary::from_power(&power, true);
        assert_eq!(summary.damage, None);
        assert_eq!(summary.average_damage, None);
        assert!(!summary.counted);
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = PowerSummary::from_power(&Power::leveled("Growth", "GROWTH", 4), false);
        let json = serde_json::to_value(&summary).expect("serializes");
        assert_eq!(json["kind"], "growth");
        assert!(json.get("averageDamage").is_some());
    }
}
