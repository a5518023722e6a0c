use nivo_core::error::NivoError;
use nivo_core::extraction::pdftotext::PdftotextExtractor;
use nivo_core::registry::{builtin, load_registry};
use std::path::PathBuf;

use crate::output;
use crate::record::BulletinRecord;

pub fn run(
    input_file: PathBuf,
    registry_file: Option<PathBuf>,
    output_format: &str,
    out: Option<PathBuf>,
    source: Option<String>,
) -> Result<(), NivoError> {
    let registry = match registry_file {
        Some(path) => load_registry(&path)?,
        None => builtin::load_builtin()?,
    };

    let is_pdf = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    let result = if is_pdf {
        let pdf_bytes = std::fs::read(&input_file)?;
        let extractor = PdftotextExtractor::new();
        nivo_core::resolve_pdf(&pdf_bytes, &extractor, &registry)?
    } else {
        let raw = std::fs::read_to_string(&input_file)?;
        let text = nivo_core::extraction::normalize_text(&raw);
        nivo_core::resolve_text(&text, &registry)
    };

    let source = source.unwrap_or_else(|| input_file.display().to_string());
    let record = BulletinRecord::new(source, result);

    if let Some(path) = &out {
        std::fs::write(path, serde_json::to_string_pretty(&record)?)?;
        println!("Wrote bulletin record to {}", path.display());
    }

    match output_format {
        "json" => output::json::print(&record)?,
        _ => output::table::print(&record),
    }

    Ok(())
}
