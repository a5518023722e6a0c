use crate::extract::{extract_band, extract_from_text};
use crate::locate::{GroupKind, SectionCache};
use crate::model::{AltitudeBand, Provenance, RiskLevel};
use crate::registry::schema::MassifDef;
use crate::registry::Registry;
use crate::resolve::outcome::MassifResult;
use crate::resolve::special;

/// Resolve one massif against the bulletin text.
///
/// Section lookups go through the shared cache so a group shared by several
/// massifs is located once per run.
pub fn resolve_massif(
    massif: &MassifDef,
    registry: &Registry,
    text: &str,
    cache: &mut SectionCache,
) -> MassifResult {
    if massif.no_source_data {
        return MassifResult::absent();
    }

    let mentioned = is_mentioned(text, &massif.names);

    let mut provenance = Provenance::None;
    let mut fragment: Option<String> = None;

    if let Some(gid) = &massif.specific_group {
        if let Some(group) = registry.specific_group(gid) {
            if let Some(frag) = cache.fragment(text, GroupKind::Specific, gid, group) {
                fragment = Some(frag.to_string());
                provenance = Provenance::Specific;
            }
        }
    }
    if fragment.is_none() {
        if let Some(gid) = &massif.regional_group {
            if let Some(group) = registry.regional_group(gid) {
                if let Some(frag) = cache.fragment(text, GroupKind::Regional, gid, group) {
                    fragment = Some(frag.to_string());
                    provenance = Provenance::Regional;
                }
            }
        }
    }

    let Some(fragment) = fragment else {
        return MassifResult {
            found: false,
            mentioned,
            provenance: Provenance::None,
            above: RiskLevel::UNKNOWN,
            below: RiskLevel::UNKNOWN,
        };
    };

    let (above, below) = if let Some(handler) = massif.special_handler {
        special::apply(handler, &fragment)
    } else if massif.no_altitude_split || provenance == Provenance::Regional {
        // One level applies to both bands.
        let level = extract_from_text(&fragment).unwrap_or(RiskLevel::UNKNOWN);
        (level, level)
    } else {
        let above = extract_band(&fragment, AltitudeBand::Above).unwrap_or(RiskLevel::UNKNOWN);
        let below =
            extract_band(&fragment, AltitudeBand::Below).unwrap_or_else(|| above.step_down());
        (above, below)
    };

    MassifResult {
        found: true,
        mentioned,
        provenance,
        above,
        below,
    }
}

/// Whether any of the massif's name variants appears in the bulletin.
fn is_mentioned(text: &str, names: &[String]) -> bool {
    let hay = text.to_lowercase();
    names.iter().any(|name| hay.contains(&name.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::parse_registry_str;

    const FILLER: &str = "stratul de zapada prezinta instabilitate pe versantii nordici, \
cu depuneri recente transportate de vant ";

    fn registry() -> Registry {
        parse_registry_str(
            r#"{
                "specific_groups": {
                    "alpha_beta": { "starts": ["munții alpha"], "ends": ["munții gamma"] }
                },
                "regional_groups": {
                    "sud": { "starts": ["carpații de sud"], "ends": ["carpații de nord"] }
                },
                "massifs": [
                    { "id": "alpha", "names": ["alpha"],
                      "specific_group": "alpha_beta", "regional_group": "sud" },
                    { "id": "delta", "names": ["delta"], "regional_group": "sud" },
                    { "id": "plat", "names": ["plat"],
                      "specific_group": "alpha_beta", "no_altitude_split": true },
                    { "id": "mut", "names": ["mut"], "no_source_data": true }
                ]
            }"#,
        )
        .unwrap()
    }

    fn resolve(id: &str, text: &str) -> MassifResult {
        let registry = registry();
        let mut cache = SectionCache::default();
        let massif = registry.massif(id).unwrap().clone();
        resolve_massif(&massif, &registry, text, &mut cache)
    }

    #[test]
    fn test_specific_two_band_extraction() {
        let text = format!(
            "MUNȚII ALPHA {FILLER} peste 1800 m risc ridicat (4), sub 1800 m risc moderat (2)."
        );
        let r = resolve("alpha", &text);
        assert!(r.found);
        assert_eq!(r.provenance, Provenance::Specific);
        assert_eq!(r.above.value(), 4);
        assert_eq!(r.below.value(), 2);
    }

    #[test]
    fn test_missing_below_band_defaults_one_lower() {
        let text = format!("MUNȚII ALPHA {FILLER} peste 1800 m risc însemnat (3).");
        let r = resolve("alpha", &text);
        assert_eq!(r.above.value(), 3);
        assert_eq!(r.below.value(), 2);
    }

    #[test]
    fn test_regional_fallback_single_level() {
        let text = format!("CARPAȚII DE SUD {FILLER} risc moderat (2) pe creste.");
        let r = resolve("alpha", &text);
        assert_eq!(r.provenance, Provenance::Regional);
        assert_eq!(r.above.value(), 2);
        assert_eq!(r.below.value(), 2);
    }

    #[test]
    fn test_no_altitude_split_single_level() {
        let text = format!("MUNȚII ALPHA {FILLER} peste 1800 m risc ridicat (4), sub 1800 m risc redus (1).");
        let r = resolve("plat", &text);
        assert_eq!(r.provenance, Provenance::Specific);
        // Single-level massif: the first readable level applies to both bands.
        assert_eq!(r.above, r.below);
    }

    #[test]
    fn test_nothing_found() {
        let r = resolve("alpha", "buletin despre cu totul alti munti");
        assert!(!r.found);
        assert_eq!(r.provenance, Provenance::None);
        assert!(r.above.is_unknown());
        assert!(r.below.is_unknown());
    }

    #[test]
    fn test_no_source_data_ignores_bulletin() {
        let text = format!("MUNȚII ALPHA {FILLER} risc ridicat (4) si mentiune despre mut");
        let r = resolve("mut", &text);
        assert_eq!(r, MassifResult::absent());
    }

    #[test]
    fn test_mention_does_not_gate_extraction() {
        // "delta" never appears, yet its regional section resolves.
        let text = format!("CARPAȚII DE SUD {FILLER} risc redus (1).");
        let r = resolve("delta", &text);
        assert!(!r.mentioned);
        assert!(r.found);
        assert_eq!(r.above.value(), 1);
    }

    #[test]
    fn test_mention_recorded() {
        let text = format!("Masivul Alpha: CARPAȚII DE SUD {FILLER} risc redus (1).");
        assert!(resolve("alpha", &text).mentioned);
    }
}
