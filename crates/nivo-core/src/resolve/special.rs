//! Massif-specific extraction variants for shared bulletin sections.
//!
//! The Făgăraș and Bucegi massifs are described in one shared passage whose
//! below-threshold risk differs per massif: the text opens with a common
//! above-threshold statement, then carves out Bucegi in its own clause.
//! Each variant is a pure function over the section fragment and conforms
//! to the same two-band result shape as the standard extraction.

use crate::extract::{clip, extract_band, extract_from_text};
use crate::model::{AltitudeBand, RiskLevel};
use crate::registry::schema::SpecialHandler;

/// Bytes of clause text inspected after a massif cue.
const CLAUSE_WINDOW: usize = 120;

const FAGARAS_CUES: &[&str] = &["în masivul făgăraș", "in masivul fagaras", "în făgăraș"];
const BUCEGI_CUES: &[&str] = &["în masivul bucegi", "in masivul bucegi", "în bucegi"];

/// Dispatch a configured handler over a section fragment.
pub fn apply(handler: SpecialHandler, fragment: &str) -> (RiskLevel, RiskLevel) {
    match handler {
        SpecialHandler::FagarasShared => fagaras_shared(fragment),
        SpecialHandler::BucegiShared => bucegi_shared(fragment),
    }
}

/// Făgăraș carries the section's headline level for both bands unless the
/// below-threshold text gives it a clause of its own.
fn fagaras_shared(fragment: &str) -> (RiskLevel, RiskLevel) {
    let above = shared_above(fragment);
    let below = clause_level(fragment, FAGARAS_CUES).unwrap_or(above);
    (above, below)
}

/// Bucegi shares the above-threshold level but its below-threshold risk
/// comes from the "în masivul Bucegi" clause when present.
fn bucegi_shared(fragment: &str) -> (RiskLevel, RiskLevel) {
    let above = shared_above(fragment);
    let below = clause_level(fragment, BUCEGI_CUES).unwrap_or_else(|| above.step_down());
    (above, below)
}

fn shared_above(fragment: &str) -> RiskLevel {
    extract_band(fragment, AltitudeBand::Above)
        .or_else(|| extract_from_text(fragment))
        .unwrap_or(RiskLevel::UNKNOWN)
}

/// Risk level stated in the clause opened by the first matching cue.
fn clause_level(fragment: &str, cues: &[&str]) -> Option<RiskLevel> {
    let hay = fragment.to_lowercase();
    let at = cues.iter().find_map(|cue| hay.find(cue))?;
    extract_from_text(clip(&hay[at..], CLAUSE_WINDOW))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u8) -> RiskLevel {
        RiskLevel::new(n).unwrap()
    }

    const SHARED: &str = "MUNȚII FĂGĂRAȘ Starea stratului de zăpadă: \
peste 1800 m: risc va fi ridicat(4) pe majoritatea versanților. \
Sub 1800 m: stratul este umezit. În masivul Bucegi risc moderat(2) pe pantele însorite.";

    #[test]
    fn test_fagaras_inherits_headline_below() {
        // No Făgăraș-specific below clause: both bands carry the shared level.
        assert_eq!(apply(SpecialHandler::FagarasShared, SHARED), (level(4), level(4)));
    }

    #[test]
    fn test_bucegi_splits_below_from_clause() {
        assert_eq!(apply(SpecialHandler::BucegiShared, SHARED), (level(4), level(2)));
    }

    #[test]
    fn test_fagaras_own_clause_wins() {
        let text = "peste 1800 m risc ridicat (4). Sub 1800 m: în masivul Făgăraș risc redus (1).";
        assert_eq!(apply(SpecialHandler::FagarasShared, text), (level(4), level(1)));
    }

    #[test]
    fn test_bucegi_without_clause_defaults_one_below() {
        let text = "peste 1800 m risc însemnat (3), zăpadă viscolită pe creste.";
        assert_eq!(apply(SpecialHandler::BucegiShared, text), (level(3), level(2)));
    }

    #[test]
    fn test_unreadable_fragment_stays_unknown() {
        let (above, below) = apply(SpecialHandler::FagarasShared, "text fara date utile");
        assert!(above.is_unknown());
        assert!(below.is_unknown());
    }
}
