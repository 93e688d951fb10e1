//! Stat value object - the named statistics a modification can target.
//!
//! Provides type safety for stat references instead of magic strings like
//! "STR" or "rPD". Serialises to the same short codes the character documents use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// A character statistic: characteristics, defenses, movement, and a few
/// sensory and physical figures that abilities can modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    // Primary characteristics
    #[serde(rename = "STR")]
    Str,
    #[serde(rename = "DEX")]
    Dex,
    #[serde(rename = "CON")]
    Con,
    #[serde(rename = "INT")]
    Int,
    #[serde(rename = "EGO")]
    Ego,
    #[serde(rename = "PRE")]
    Pre,
    #[serde(rename = "COM")]
    Com,
    // Combat characteristics
    #[serde(rename = "OCV")]
    Ocv,
    #[serde(rename = "DCV")]
    Dcv,
    #[serde(rename = "OMCV")]
    Omcv,
    #[serde(rename = "DMCV")]
    Dmcv,
    // Secondary characteristics
    #[serde(rename = "SPD")]
    Spd,
    #[serde(rename = "PD")]
    Pd,
    #[serde(rename = "ED")]
    Ed,
    #[serde(rename = "REC")]
    Rec,
    #[serde(rename = "END")]
    End,
    #[serde(rename = "BODY")]
    Body,
    #[serde(rename = "STUN")]
    Stun,
    // Movement characteristics
    #[serde(rename = "RUNNING")]
    Running,
    #[serde(rename = "SWIMMING")]
    Swimming,
    #[serde(rename = "LEAPING")]
    Leaping,
    // Derived defenses and movement granted by powers
    #[serde(rename = "rPD")]
    ResistantPd,
    #[serde(rename = "rED")]
    ResistantEd,
    #[serde(rename = "FLASHDEFENSE")]
    FlashDefense,
    #[serde(rename = "MENTALDEFENSE")]
    MentalDefense,
    #[serde(rename = "POWERDEFENSE")]
    PowerDefense,
    #[serde(rename = "KBRESISTANCE")]
    KnockbackResistance,
    #[serde(rename = "FLIGHT")]
    Flight,
    #[serde(rename = "TELEPORTATION")]
    Teleportation,
    #[serde(rename = "PER")]
    Perception,
    #[serde(rename = "MASS")]
    Mass,
}

impl Stat {
    /// Every stat that can be bought directly as a characteristic.
    pub const CHARACTERISTICS: [Stat; 21] = [
        Stat::Str,
        Stat::Dex,
        Stat::Con,
        Stat::Int,
        Stat::Ego,
        Stat::Pre,
        Stat::Com,
        Stat::Ocv,
        Stat::Dcv,
        Stat::Omcv,
        Stat::Dmcv,
        Stat::Spd,
        Stat::Pd,
        Stat::Ed,
        Stat::Rec,
        Stat::End,
        Stat::Body,
        Stat::Stun,
        Stat::Running,
        Stat::Swimming,
        Stat::Leaping,
    ];

    /// Returns the document code (e.g., "STR", "rPD").
    pub fn code(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::Con => "CON",
            Self::Int => "INT",
            Self::Ego => "EGO",
            Self::Pre => "PRE",
            Self::Com => "COM",
            Self::Ocv => "OCV",
            Self::Dcv => "DCV",
            Self::Omcv => "OMCV",
            Self::Dmcv => "DMCV",
            Self::Spd => "SPD",
            Self::Pd => "PD",
            Self::Ed => "ED",
            Self::Rec => "REC",
            Self::End => "END",
            Self::Body => "BODY",
            Self::Stun => "STUN",
            Self::Running => "RUNNING",
            Self::Swimming => "SWIMMING",
            Self::Leaping => "LEAPING",
            Self::ResistantPd => "rPD",
            Self::ResistantEd => "rED",
            Self::FlashDefense => "FLASHDEFENSE",
            Self::MentalDefense => "MENTALDEFENSE",
            Self::PowerDefense => "POWERDEFENSE",
            Self::KnockbackResistance => "KBRESISTANCE",
            Self::Flight => "FLIGHT",
            Self::Teleportation => "TELEPORTATION",
            Self::Perception => "PER",
            Self::Mass => "MASS",
        }
    }

    /// Returns the full name of the stat (e.g., "Strength", "Resistant PD").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Dex => "Dexterity",
            Self::Con => "Constitution",
            Self::Int => "Intelligence",
            Self::Ego => "Ego",
            Self::Pre => "Presence",
            Self::Com => "Comeliness",
            Self::Ocv => "Offensive Combat Value",
            Self::Dcv => "Defensive Combat Value",
            Self::Omcv => "Offensive Mental Combat Value",
            Self::Dmcv => "Defensive Mental Combat Value",
            Self::Spd => "Speed",
            Self::Pd => "Physical Defense",
            Self::Ed => "Energy Defense",
            Self::Rec => "Recovery",
            Self::End => "Endurance",
            Self::Body => "Body",
            Self::Stun => "Stun",
            Self::Running => "Running",
            Self::Swimming => "Swimming",
            Self::Leaping => "Leaping",
            Self::ResistantPd => "Resistant PD",
            Self::ResistantEd => "Resistant ED",
            Self::FlashDefense => "Flash Defense",
            Self::MentalDefense => "Mental Defense",
            Self::PowerDefense => "Power Defense",
            Self::KnockbackResistance => "Knockback Resistance",
            Self::Flight => "Flight",
            Self::Teleportation => "Teleportation",
            Self::Perception => "Perception",
            Self::Mass => "Mass",
        }
    }

    /// Whether this stat is a buyable characteristic (primary, combat,
    /// secondary, or movement).
    pub fn is_characteristic(&self) -> bool {
        Self::CHARACTERISTICS.contains(self)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Stat {
    type Err = DomainError;

    /// Parses a stat code, ignoring case ("rpd", "RPD" and "rPD" all match).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STR" => Ok(Self::Str),
            "DEX" => Ok(Self::Dex),
            "CON" => Ok(Self::Con),
            "INT" => Ok(Self::Int),
            "EGO" => Ok(Self::Ego),
            "PRE" => Ok(Self::Pre),
            "COM" => Ok(Self::Com),
            "OCV" => Ok(Self::Ocv),
            "DCV" => Ok(Self::Dcv),
            "OMCV" => Ok(Self::Omcv),
            "DMCV" => Ok(Self::Dmcv),
            "SPD" => Ok(Self::Spd),
            "PD" => Ok(Self::Pd),
            "ED" => Ok(Self::Ed),
            "REC" => Ok(Self::Rec),
            "END" => Ok(Self::End),
            "BODY" => Ok(Self::Body),
            "STUN" => Ok(Self::Stun),
            "RUNNING" => Ok(Self::Running),
            "SWIMMING" => Ok(Self::Swimming),
            "LEAPING" => Ok(Self::Leaping),
            "RPD" => Ok(Self::ResistantPd),
            "RED" => Ok(Self::ResistantEd),
            "FLASHDEFENSE" => Ok(Self::FlashDefense),
            "MENTALDEFENSE" => Ok(Self::MentalDefense),
            "POWERDEFENSE" => Ok(Self::PowerDefense),
            "KBRESISTANCE" => Ok(Self::KnockbackResistance),
            "FLIGHT" => Ok(Self::Flight),
            "TELEPORTATION" => Ok(Self::Teleportation),
            "PER" => Ok(Self::Perception),
            "MASS" => Ok(Self::Mass),
            _ => Err(DomainError::unknown_stat(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips_through_from_str() {
        for stat in Stat::CHARACTERISTICS {
            assert_eq!(stat.code().parse::<Stat>().ok(), Some(stat));
        }
        assert_eq!("rPD".parse::<Stat>().ok(), Some(Stat::ResistantPd));
        assert_eq!("red".parse::<Stat>().ok(), Some(Stat::ResistantEd));
    }

    #[test]
    fn unknown_code_is_an_error() {
        let err = "WIS".parse::<Stat>().unwrap_err();
        assert!(matches!(err, DomainError::UnknownStat(_)));
    }

    #[test]
    fn movement_is_characteristic_but_flight_is_not() {
        assert!(Stat::Running.is_characteristic());
        assert!(Stat::Dcv.is_characteristic());
        assert!(!Stat::Flight.is_characteristic());
        assert!(!Stat::ResistantPd.is_characteristic());
        assert!(!Stat::Perception.is_characteristic());
    }

    #[test]
    fn serializes_to_document_codes() {
        assert_eq!(serde_json::to_string(&Stat::ResistantPd).expect("stat serde"), "\"rPD\"");
        assert_eq!(serde_json::to_string(&Stat::Perception).expect("stat serde"), "\"PER\"");
        let parsed: Stat = serde_json::from_str("\"STUN\"").expect("stat serde");
        assert_eq!(parsed, Stat::Stun);
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(format!("{}", Stat::KnockbackResistance), "KBRESISTANCE");
        assert_eq!(Stat::Pre.display_name(), "Presence");
    }
}
