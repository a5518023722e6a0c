//! Section Locator: finds the bulletin passage belonging to a group of
//! massifs. Matching is case-insensitive but diacritic-sensitive, so the
//! pattern tables carry both accented and plain variants where extraction
//! artifacts make that necessary.

use crate::registry::schema::GroupPatternDef;
use std::collections::HashMap;

/// Minimum distance (bytes) between a start match and an accepted end
/// match. End patterns closer than this would truncate the line that
/// contains the start pattern itself.
pub const MIN_SECTION_SPAN: usize = 100;

/// Which pattern table a group identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Specific,
    Regional,
}

/// Case-folded view of a text with a map back into the original bytes.
/// Unicode lowercasing may change byte lengths, so fragment boundaries
/// found in the folded text cannot be used on the original directly.
struct Folded {
    lowered: String,
    offsets: Vec<usize>,
}

impl Folded {
    fn new(text: &str) -> Folded {
        let mut lowered = String::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len());
        for (idx, ch) in text.char_indices() {
            for lc in ch.to_lowercase() {
                lowered.push(lc);
                offsets.resize(lowered.len(), idx);
            }
        }
        Folded { lowered, offsets }
    }

    /// Byte offset in the folded text mapped back to the original.
    fn original(&self, lowered_idx: usize, original_len: usize) -> usize {
        self.offsets.get(lowered_idx).copied().unwrap_or(original_len)
    }
}

/// Find the text span described by a group's pattern tables.
///
/// The first start pattern that matches decides the start offset. Among end
/// patterns matching at least [`MIN_SECTION_SPAN`] bytes past the start, the
/// earliest wins; with none qualifying, the fragment runs to end of text.
pub fn locate(text: &str, group: &GroupPatternDef) -> Option<String> {
    let folded = Folded::new(text);

    let start = group
        .starts
        .iter()
        .find_map(|pattern| folded.lowered.find(&pattern.to_lowercase()))?;

    let tail = &folded.lowered[start..];
    let mut end: Option<usize> = None;
    for pattern in &group.ends {
        let pattern = pattern.to_lowercase();
        let mut from = 0;
        while let Some(pos) = tail[from..].find(&pattern) {
            let at = from + pos;
            if at >= MIN_SECTION_SPAN {
                if end.map_or(true, |e| at < e) {
                    end = Some(at);
                }
                break;
            }
            from = at + pattern.len();
        }
    }

    let lo = folded.original(start, text.len());
    let hi = match end {
        Some(rel) => folded.original(start + rel, text.len()),
        None => text.len(),
    };
    Some(text[lo..hi].to_string())
}

/// Per-run cache of located fragments, keyed by group identifier, so a
/// section shared by several massifs is located once.
#[derive(Debug, Default)]
pub struct SectionCache {
    fragments: HashMap<(GroupKind, String), Option<String>>,
}

impl SectionCache {
    /// Look up a group's fragment, locating and caching it on first use.
    pub fn fragment(
        &mut self,
        text: &str,
        kind: GroupKind,
        id: &str,
        group: &GroupPatternDef,
    ) -> Option<&str> {
        self.fragments
            .entry((kind, id.to_string()))
            .or_insert_with(|| locate(text, group))
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(starts: &[&str], ends: &[&str]) -> GroupPatternDef {
        GroupPatternDef {
            starts: starts.iter().map(|s| s.to_string()).collect(),
            ends: ends.iter().map(|s| s.to_string()).collect(),
        }
    }

    const FILLER: &str = "stratul de zapada este instabil pe versantii nordici si umbriti, \
persista placi de vant friabile ";

    #[test]
    fn test_first_start_pattern_wins() {
        let text = format!("intro MUNTII B aici {FILLER} MUNTII A dincolo {FILLER} FINAL");
        let g = group(&["muntii a", "muntii b"], &["final"]);
        let fragment = locate(&text, &g).unwrap();
        // "muntii a" is listed first, so its (later) match decides the start.
        assert!(fragment.starts_with("MUNTII A"));
    }

    #[test]
    fn test_end_within_guard_is_ignored() {
        // One end match ~50 bytes in (inside the guard), another past it.
        let text =
            format!("START strat nou de zapada depus peste crusta veche PAUZA {FILLER} PAUZA coada");
        assert!(text.find("PAUZA").unwrap() < MIN_SECTION_SPAN);
        let g = group(&["start"], &["pauza"]);
        let fragment = locate(&text, &g).unwrap();
        assert!(fragment.len() > MIN_SECTION_SPAN);
        assert!(!fragment.contains("coada"));
    }

    #[test]
    fn test_no_qualifying_end_extends_to_text_end() {
        let text = "START abc PAUZA si nimic altceva dupa";
        let g = group(&["start"], &["pauza"]);
        let fragment = locate(text, &g).unwrap();
        assert_eq!(fragment, text);
    }

    #[test]
    fn test_earliest_qualifying_end_wins() {
        let text = format!("START {FILLER} BETA gamma {FILLER} ALFA delta");
        let g = group(&["start"], &["alfa", "beta"]);
        let fragment = locate(&text, &g).unwrap();
        assert!(!fragment.contains("BETA"));
    }

    #[test]
    fn test_case_insensitive_diacritic_sensitive() {
        let text = format!("MUNȚII FĂGĂRAȘ {FILLER}");
        let g = group(&["munții făgăraș"], &[]);
        assert!(locate(&text, &g).is_some());

        // Same pattern must not match the diacritic-stripped spelling.
        let plain = format!("MUNTII FAGARAS {FILLER}");
        assert!(locate(&plain, &g).is_none());
    }

    #[test]
    fn test_not_found() {
        let g = group(&["munții rodnei"], &[]);
        assert!(locate("buletin fara sectiunea cautata", &g).is_none());
    }

    #[test]
    fn test_fragment_preserves_original_casing() {
        let text = format!("MUNȚII RODNEI Zăpada {FILLER}");
        let g = group(&["munții rodnei"], &[]);
        let fragment = locate(&text, &g).unwrap();
        assert!(fragment.starts_with("MUNȚII RODNEI"));
    }

    #[test]
    fn test_cache_locates_each_group_once() {
        let text = format!("MUNTII A {FILLER} FINAL");
        let g = group(&["muntii a"], &["final"]);
        let mut cache = SectionCache::default();
        let first = cache.fragment(&text, GroupKind::Specific, "g", &g).map(str::to_string);
        // Second lookup hits the cache even with a group that cannot match.
        let missing = group(&["absent"], &[]);
        let second = cache.fragment(&text, GroupKind::Specific, "g", &missing);
        assert_eq!(first.as_deref(), second);
    }
}
