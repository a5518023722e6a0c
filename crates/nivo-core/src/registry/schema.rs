use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A registry document: group pattern tables plus one entry per massif.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryDef {
    /// Textually precise sections, e.g. "massif X and Y".
    #[serde(default)]
    pub specific_groups: BTreeMap<String, GroupPatternDef>,
    /// Coarse fallback sections by mountain range.
    #[serde(default)]
    pub regional_groups: BTreeMap<String, GroupPatternDef>,
    pub massifs: Vec<MassifDef>,
}

/// Ordered start/end patterns bounding one bulletin section.
///
/// The first start pattern that matches wins. Among end patterns, the
/// earliest match past the minimum span guard wins; with no qualifying
/// match the section runs to the end of the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupPatternDef {
    pub starts: Vec<String>,
    #[serde(default)]
    pub ends: Vec<String>,
}

/// Configuration for a single massif.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MassifDef {
    pub id: String,
    /// Name variants used to detect an explicit mention in the bulletin.
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub specific_group: Option<String>,
    #[serde(default)]
    pub regional_group: Option<String>,
    /// Massif whose result is adopted when this one stays unresolved.
    #[serde(default)]
    pub fallback_to: Option<String>,
    /// The bulletin reports a single level for this massif, not two bands.
    #[serde(default)]
    pub no_altitude_split: bool,
    /// The upstream source never publishes data for this massif.
    #[serde(default)]
    pub no_source_data: bool,
    #[serde(default)]
    pub special_handler: Option<SpecialHandler>,
}

/// Massif-specific extraction variants for sections that interleave two
/// massifs' data non-uniformly. A closed set; each variant is dispatched
/// by the resolver as a pure function over the section fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialHandler {
    /// Făgăraș inside the shared Făgăraș/Bucegi section.
    FagarasShared,
    /// Bucegi inside the shared Făgăraș/Bucegi section.
    BucegiShared,
}
