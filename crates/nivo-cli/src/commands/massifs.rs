use nivo_core::error::NivoError;
use nivo_core::registry::{builtin, load_registry};
use std::path::Path;

pub fn list() -> Result<(), NivoError> {
    let registry = builtin::load_builtin()?;

    println!("Massifs in the builtin registry:\n");
    for massif in registry.massifs() {
        let mut notes = Vec::new();
        if let Some(gid) = &massif.specific_group {
            notes.push(format!("specific: {gid}"));
        }
        if let Some(gid) = &massif.regional_group {
            notes.push(format!("regional: {gid}"));
        }
        if let Some(target) = &massif.fallback_to {
            notes.push(format!("fallback: {target}"));
        }
        if massif.no_altitude_split {
            notes.push("single level".into());
        }
        if massif.no_source_data {
            notes.push("no source data".into());
        }
        println!("  {:<14} {}", massif.id, notes.join(", "));
    }
    println!(
        "\n{} massifs, {} specific groups, {} regional groups",
        registry.massifs().len(),
        registry.specific_groups().len(),
        registry.regional_groups().len()
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), NivoError> {
    let registry = load_registry(file)?;
    println!(
        "OK: {} massifs, {} specific groups, {} regional groups",
        registry.massifs().len(),
        registry.specific_groups().len(),
        registry.regional_groups().len()
    );
    Ok(())
}
