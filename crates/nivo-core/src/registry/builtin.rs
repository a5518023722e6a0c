use crate::error::NivoError;
use crate::registry::{parse_registry_str, Registry};

const MASSIFS_JSON: &str = include_str!("../../../../registry/massifs.json");

/// Load the builtin registry covering the massifs tracked by the Romanian
/// nivological bulletin.
pub fn load_builtin() -> Result<Registry, NivoError> {
    parse_registry_str(MASSIFS_JSON)
}
