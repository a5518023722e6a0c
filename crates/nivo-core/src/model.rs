use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Altitude threshold separating the bulletin's two reporting bands (metres).
pub const ALTITUDE_THRESHOLD_M: u32 = 1800;

/// Fixed label table indexed by risk level; 0 means no data could be read.
pub const RISK_LABELS: [&str; 6] = [
    "unknown",
    "low",
    "moderate",
    "considerable",
    "high",
    "very high",
];

/// Discrete avalanche danger rating, 0 (unknown) through 5 (very high).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RiskLevel(u8);

impl RiskLevel {
    pub const UNKNOWN: RiskLevel = RiskLevel(0);

    /// Construct from a numeric level; values above 5 are rejected.
    pub fn new(level: u8) -> Option<RiskLevel> {
        (level <= 5).then_some(RiskLevel(level))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        RISK_LABELS[self.0 as usize]
    }

    pub fn is_unknown(self) -> bool {
        self.0 == 0
    }

    /// One level lower, saturating at 0.
    pub fn step_down(self) -> RiskLevel {
        RiskLevel(self.0.saturating_sub(1))
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}

impl Serialize for RiskLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Serialized levels always carry both the number and its label.
        let mut s = serializer.serialize_struct("RiskLevel", 2)?;
        s.serialize_field("level", &self.0)?;
        s.serialize_field("label", self.label())?;
        s.end()
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            level: u8,
        }
        let raw = Raw::deserialize(deserializer)?;
        RiskLevel::new(raw.level)
            .ok_or_else(|| D::Error::custom(format!("risk level {} out of range 0-5", raw.level)))
    }
}

/// The two reporting bands around the 1800 m threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltitudeBand {
    Above,
    Below,
}

/// How a massif's result was obtained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Provenance {
    /// No usable data (absent massif, exhausted fallback, or declared absence).
    #[default]
    None,
    /// Extracted from the massif's own specific-group section.
    Specific,
    /// Extracted from the coarser mountain-range section.
    Regional,
    /// Copied from another massif's result via the fallback chain.
    Fallback(String),
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::None => write!(f, "none"),
            Provenance::Specific => write!(f, "specific"),
            Provenance::Regional => write!(f, "regional"),
            Provenance::Fallback(id) => write!(f, "fallback:{id}"),
        }
    }
}

impl FromStr for Provenance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Provenance::None),
            "specific" => Ok(Provenance::Specific),
            "regional" => Ok(Provenance::Regional),
            _ => match s.strip_prefix("fallback:") {
                Some(id) if !id.is_empty() => Ok(Provenance::Fallback(id.to_string())),
                _ => Err(format!("unrecognized provenance tag '{s}'")),
            },
        }
    }
}

impl Serialize for Provenance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Provenance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bounds() {
        assert_eq!(RiskLevel::new(0), Some(RiskLevel::UNKNOWN));
        assert!(RiskLevel::new(5).is_some());
        assert!(RiskLevel::new(6).is_none());
    }

    #[test]
    fn test_labels_match_fixed_table() {
        for level in 0..=5u8 {
            let risk = RiskLevel::new(level).unwrap();
            assert_eq!(risk.label(), RISK_LABELS[level as usize]);
        }
        assert_eq!(RiskLevel::new(4).unwrap().label(), "high");
    }

    #[test]
    fn test_step_down_floors_at_zero() {
        let low = RiskLevel::new(1).unwrap();
        assert_eq!(low.step_down(), RiskLevel::UNKNOWN);
        assert_eq!(RiskLevel::UNKNOWN.step_down(), RiskLevel::UNKNOWN);
    }

    #[test]
    fn test_level_serializes_with_label() {
        let json = serde_json::to_value(RiskLevel::new(4).unwrap()).unwrap();
        assert_eq!(json["level"], 4);
        assert_eq!(json["label"], "high");
    }

    #[test]
    fn test_level_deserialize_rejects_out_of_range() {
        let ok: RiskLevel = serde_json::from_str(r#"{"level":3,"label":"considerable"}"#).unwrap();
        assert_eq!(ok.value(), 3);
        assert!(serde_json::from_str::<RiskLevel>(r#"{"level":7}"#).is_err());
    }

    #[test]
    fn test_provenance_tags_round_trip() {
        for tag in ["none", "specific", "regional", "fallback:tarcu"] {
            let p: Provenance = tag.parse().unwrap();
            assert_eq!(p.to_string(), tag);
        }
        assert!("fallback:".parse::<Provenance>().is_err());
        assert!("direct".parse::<Provenance>().is_err());
    }

    #[test]
    fn test_provenance_serializes_as_tag() {
        let json = serde_json::to_string(&Provenance::Fallback("parang".into())).unwrap();
        assert_eq!(json, r#""fallback:parang""#);
    }
}
