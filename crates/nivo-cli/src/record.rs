use chrono::{DateTime, Utc};
use nivo_core::resolve::outcome::{MassifResult, ResolutionResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The persisted artifact: per-massif results plus generation metadata.
/// The timestamp is attached here, outside the resolution core, which
/// itself stays time-independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletinRecord {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub massifs: BTreeMap<String, MassifResult>,
}

impl BulletinRecord {
    pub fn new(source: String, result: ResolutionResult) -> BulletinRecord {
        BulletinRecord {
            generated_at: Utc::now(),
            source,
            massifs: result.massifs,
        }
    }
}
