use crate::model::{Provenance, RiskLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolution outcome for a single massif.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassifResult {
    /// Whether a bulletin section was found for this massif.
    pub found: bool,
    /// Whether one of the massif's name variants appears anywhere in the
    /// bulletin. Informational; extraction does not depend on it.
    pub mentioned: bool,
    /// How the result was obtained.
    pub provenance: Provenance,
    /// Risk above the 1800 m threshold.
    pub above: RiskLevel,
    /// Risk below the 1800 m threshold.
    pub below: RiskLevel,
}

impl MassifResult {
    /// The fixed result for massifs without data: a declared absence, not a
    /// parse failure.
    pub fn absent() -> MassifResult {
        MassifResult {
            found: false,
            mentioned: false,
            provenance: Provenance::None,
            above: RiskLevel::UNKNOWN,
            below: RiskLevel::UNKNOWN,
        }
    }

    /// Whether this result carries data a fallback source could adopt.
    pub fn is_usable(&self) -> bool {
        self.found
            && self.provenance != Provenance::None
            && !(self.above.is_unknown() && self.below.is_unknown())
    }
}

/// Per-massif results for one bulletin; every massif in the registry appears
/// exactly once, including absent and fallback-exhausted ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub massifs: BTreeMap<String, MassifResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_result_shape() {
        let r = MassifResult::absent();
        assert!(!r.found);
        assert_eq!(r.provenance, Provenance::None);
        assert!(r.above.is_unknown());
        assert!(r.below.is_unknown());
        assert!(!r.is_usable());
    }

    #[test]
    fn test_usable_requires_some_level() {
        let mut r = MassifResult {
            found: true,
            mentioned: true,
            provenance: Provenance::Specific,
            above: RiskLevel::UNKNOWN,
            below: RiskLevel::UNKNOWN,
        };
        assert!(!r.is_usable());
        r.above = RiskLevel::new(2).unwrap();
        assert!(r.is_usable());
    }
}
