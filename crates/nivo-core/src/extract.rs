//! Risk Extractor: reads a discrete risk level out of a section fragment
//! using layered heuristics. Rule order is the sole disambiguation; the
//! first matching rule wins and no rule ever guesses — a fragment without
//! readable data yields `None` and the resolver decides the default.

use crate::model::{AltitudeBand, RiskLevel};

/// How far past "risc" a digit may sit and still count as adjacent (bytes).
const DIGIT_WINDOW: usize = 40;

/// Textual qualifiers with their numeric levels. "foarte ridicat" must be
/// tried before "ridicat", so the table is ordered from level 5 down.
const QUALIFIERS: &[(&str, u8)] = &[
    ("foarte ridicat", 5),
    ("ridicat", 4),
    ("însemnat", 3),
    ("insemnat", 3),
    ("moderat", 2),
    ("redus", 1),
    ("scăzut", 1),
    ("scazut", 1),
];

/// Band label tokens; the bulletin writes the threshold with or without a
/// thousands separator.
const ABOVE_LABELS: &[&str] = &["peste 1800", "peste 1.800"];
const BELOW_LABELS: &[&str] = &["sub 1800", "sub 1.800"];

/// Tokens that terminate a band sub-fragment besides the other band's label:
/// the next section header or a page marker.
const SECTION_BOUNDARIES: &[&str] = &["munții", "muntii", "carpații", "carpatii", "pagina"];

/// Extract the risk level reported for one altitude band.
///
/// Finds the sub-fragment introduced by the band's label token, bounded by
/// the other band's label, a section/page marker, or the end of the
/// fragment, then applies the layered extraction rules to it.
pub fn extract_band(fragment: &str, band: AltitudeBand) -> Option<RiskLevel> {
    let hay = fragment.to_lowercase();
    let sub = band_fragment(&hay, band)?;
    extract_lowered(sub)
}

/// Extract a risk level from a text fragment.
pub fn extract_from_text(fragment: &str) -> Option<RiskLevel> {
    extract_lowered(&fragment.to_lowercase())
}

fn extract_lowered(hay: &str) -> Option<RiskLevel> {
    digit_near_risc(hay)
        .or_else(|| qualifier_level(hay))
        .or_else(|| header_level(hay))
}

/// The sub-fragment opened by a band's label token. `hay` must already be
/// lowercased.
fn band_fragment(hay: &str, band: AltitudeBand) -> Option<&str> {
    let (labels, other_labels) = match band {
        AltitudeBand::Above => (ABOVE_LABELS, BELOW_LABELS),
        AltitudeBand::Below => (BELOW_LABELS, ABOVE_LABELS),
    };

    let (at, label_len) = labels
        .iter()
        .find_map(|label| hay.find(label).map(|i| (i, label.len())))?;
    let body = &hay[at + label_len..];

    let mut end = body.len();
    for token in other_labels.iter().chain(SECTION_BOUNDARIES) {
        if let Some(i) = body.find(token) {
            end = end.min(i);
        }
    }
    Some(&body[..end])
}

/// Rule 1: an explicit digit adjacent to the word "risc", optionally with a
/// qualifier in between and optional parentheses, e.g. "risc va fi
/// ridicat(4)" or "risc 3".
fn digit_near_risc(hay: &str) -> Option<RiskLevel> {
    let mut from = 0;
    while let Some(pos) = hay[from..].find("risc") {
        let start = from + pos + "risc".len();
        if let Some(level) = window_digit(clip(&hay[start..], DIGIT_WINDOW)) {
            return RiskLevel::new(level);
        }
        from = start;
    }
    None
}

/// Rule 2: a standalone textual qualifier mapped to its fixed level.
fn qualifier_level(hay: &str) -> Option<RiskLevel> {
    for (word, level) in QUALIFIERS {
        if hay.contains(word) {
            return RiskLevel::new(*level);
        }
    }
    None
}

/// Rule 3, last resort: a header-style "RISC <digit>" token, with only
/// whitespace or a colon between the word and the digit.
fn header_level(hay: &str) -> Option<RiskLevel> {
    let mut from = 0;
    while let Some(pos) = hay[from..].find("risc") {
        let start = from + pos + "risc".len();
        let after = hay[start..].trim_start();
        let after = after.strip_prefix(':').map(str::trim_start).unwrap_or(after);
        let mut chars = after.chars();
        if let Some(d) = chars.next().and_then(|c| c.to_digit(10)) {
            let runs_on = chars.next().is_some_and(|c| c.is_ascii_digit());
            if !runs_on && (1..=5).contains(&d) {
                return RiskLevel::new(d as u8);
            }
        }
        from = start;
    }
    None
}

/// A level digit inside an adjacency window: a parenthesized digit is
/// preferred, then a digit standing alone. Digits running into other digits
/// never qualify, so altitudes like 1800 are not read as levels.
fn window_digit(window: &str) -> Option<u8> {
    let bytes = window.as_bytes();

    for i in 0..bytes.len().saturating_sub(2) {
        if bytes[i] == b'(' && bytes[i + 1].is_ascii_digit() && bytes[i + 2] == b')' {
            let d = bytes[i + 1] - b'0';
            if (1..=5).contains(&d) {
                return Some(d);
            }
        }
    }

    for i in 0..bytes.len() {
        if bytes[i].is_ascii_digit() {
            let prev_digit = i > 0 && bytes[i - 1].is_ascii_digit();
            let next_digit = bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit());
            if !prev_digit && !next_digit {
                let d = bytes[i] - b'0';
                if (1..=5).contains(&d) {
                    return Some(d);
                }
            }
        }
    }

    None
}

/// Clip to at most `max` bytes without splitting a character.
pub(crate) fn clip(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
