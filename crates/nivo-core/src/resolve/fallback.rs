//! Fallback Convergence: after the initial per-massif resolution, risk
//! values propagate along configured fallback links over a fixed number of
//! passes. A fallback target may itself only become usable once an earlier
//! pass resolved its own fallback, so one pass is not enough. The loop is
//! pass-bounded rather than fixpoint-detecting, which guarantees
//! termination for any configuration; a chain longer than the budget is
//! left partially unresolved, which is a legitimate terminal state.

use crate::locate::SectionCache;
use crate::model::Provenance;
use crate::registry::Registry;
use crate::resolve::engine::resolve_massif;
use crate::resolve::outcome::MassifResult;
use std::collections::BTreeMap;

/// Extra passes after the initial resolution; bounds fallback chain length.
pub const FALLBACK_PASSES: usize = 3;

/// Resolve every massif in the registry, then propagate fallback values.
///
/// Every registry entry appears in the output exactly once. Adopted results
/// copy the target's band values at the moment of adoption; later changes
/// to the target do not propagate backwards.
pub fn resolve_all(registry: &Registry, text: &str) -> BTreeMap<String, MassifResult> {
    let mut cache = SectionCache::default();
    let mut results: BTreeMap<String, MassifResult> = BTreeMap::new();

    for massif in registry.massifs() {
        let result = resolve_massif(massif, registry, text, &mut cache);
        results.insert(massif.id.clone(), result);
    }

    for _ in 0..FALLBACK_PASSES {
        for massif in registry.massifs() {
            let Some(target_id) = massif.fallback_to.as_deref() else {
                continue;
            };
            if results.get(&massif.id).is_some_and(MassifResult::is_usable) {
                continue;
            }
            let Some((above, below)) = results
                .get(target_id)
                .filter(|target| target.is_usable())
                .map(|target| (target.above, target.below))
            else {
                continue;
            };
            if let Some(entry) = results.get_mut(&massif.id) {
                entry.found = true;
                entry.provenance = Provenance::Fallback(target_id.to_string());
                entry.above = above;
                entry.below = below;
            }
        }
    }

    results
}
