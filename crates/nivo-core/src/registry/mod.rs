pub mod builtin;
pub mod schema;

use crate::error::NivoError;
use schema::{GroupPatternDef, MassifDef, RegistryDef};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// A validated massif registry. Construction checks referential integrity,
/// so every group and fallback reference held by a `Registry` resolves.
#[derive(Debug, Clone)]
pub struct Registry {
    def: RegistryDef,
}

impl Registry {
    pub fn from_def(def: RegistryDef) -> Result<Registry, NivoError> {
        validate_registry(&def)?;
        Ok(Registry { def })
    }

    /// Massifs in declaration order; resolution iterates this order.
    pub fn massifs(&self) -> &[MassifDef] {
        &self.def.massifs
    }

    pub fn massif(&self, id: &str) -> Option<&MassifDef> {
        self.def.massifs.iter().find(|m| m.id == id)
    }

    pub fn specific_group(&self, id: &str) -> Option<&GroupPatternDef> {
        self.def.specific_groups.get(id)
    }

    pub fn regional_group(&self, id: &str) -> Option<&GroupPatternDef> {
        self.def.regional_groups.get(id)
    }

    pub fn specific_groups(&self) -> &BTreeMap<String, GroupPatternDef> {
        &self.def.specific_groups
    }

    pub fn regional_groups(&self) -> &BTreeMap<String, GroupPatternDef> {
        &self.def.regional_groups
    }
}

/// Load a registry from a JSON file.
pub fn load_registry(path: &Path) -> Result<Registry, NivoError> {
    let content = std::fs::read_to_string(path).map_err(|e| NivoError::RegistryLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let def: RegistryDef =
        serde_json::from_str(&content).map_err(|e| NivoError::RegistryLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Registry::from_def(def)
}

/// Parse a registry from a JSON string.
pub fn parse_registry_str(json: &str) -> Result<Registry, NivoError> {
    let def: RegistryDef = serde_json::from_str(json).map_err(NivoError::Json)?;
    Registry::from_def(def)
}

/// Check that a registry document is well-formed. Dangling references are
/// configuration errors, fatal at load time.
fn validate_registry(def: &RegistryDef) -> Result<(), NivoError> {
    if def.massifs.is_empty() {
        return Err(NivoError::RegistryInvalid("massifs must not be empty".into()));
    }

    for (table, groups) in [
        ("specific_groups", &def.specific_groups),
        ("regional_groups", &def.regional_groups),
    ] {
        for (id, group) in groups {
            if group.starts.is_empty() {
                return Err(NivoError::RegistryInvalid(format!(
                    "group '{id}' in {table} has no start patterns"
                )));
            }
            if group.starts.iter().chain(&group.ends).any(|p| p.trim().is_empty()) {
                return Err(NivoError::RegistryInvalid(format!(
                    "group '{id}' in {table} contains an empty pattern"
                )));
            }
        }
    }

    let mut seen = BTreeSet::new();
    for massif in &def.massifs {
        if massif.id.is_empty() {
            return Err(NivoError::RegistryInvalid("massif with empty id".into()));
        }
        if !seen.insert(massif.id.as_str()) {
            return Err(NivoError::RegistryInvalid(format!(
                "duplicate massif id '{}'",
                massif.id
            )));
        }
        if massif.names.is_empty() && !massif.no_source_data {
            return Err(NivoError::RegistryInvalid(format!(
                "massif '{}' has no name variants",
                massif.id
            )));
        }

        if let Some(gid) = &massif.specific_group {
            if !def.specific_groups.contains_key(gid) {
                return Err(NivoError::RegistryInvalid(format!(
                    "massif '{}' references unknown specific group '{gid}'",
                    massif.id
                )));
            }
        }
        if let Some(gid) = &massif.regional_group {
            if !def.regional_groups.contains_key(gid) {
                return Err(NivoError::RegistryInvalid(format!(
                    "massif '{}' references unknown regional group '{gid}'",
                    massif.id
                )));
            }
        }
        if let Some(target) = &massif.fallback_to {
            if *target == massif.id {
                return Err(NivoError::RegistryInvalid(format!(
                    "massif '{}' falls back to itself",
                    massif.id
                )));
            }
            if !def.massifs.iter().any(|m| m.id == *target) {
                return Err(NivoError::RegistryInvalid(format!(
                    "massif '{}' falls back to unknown massif '{target}'",
                    massif.id
                )));
            }
        }
    }

    Ok(())
}
