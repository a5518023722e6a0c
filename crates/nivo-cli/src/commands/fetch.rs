use nivo_core::error::NivoError;
use nivo_core::extraction::pdftotext::PdftotextExtractor;
use nivo_core::extraction::BulletinExtractor;
use std::path::PathBuf;

/// Publication endpoint for the nivological bulletin.
pub const DEFAULT_BULLETIN_URL: &str =
    "https://www.meteoromania.ro/Upload-Produse/nivologie/nivologie.pdf";

pub fn run(url: &str, out: PathBuf, keep_pdf: Option<PathBuf>) -> Result<(), NivoError> {
    let pdf_bytes = download(url)?;

    if let Some(path) = keep_pdf {
        std::fs::write(&path, &pdf_bytes)?;
        println!("Saved PDF to {}", path.display());
    }

    let extractor = PdftotextExtractor::new();
    let text = extractor.extract_text(&pdf_bytes)?;
    std::fs::write(&out, &text)?;
    println!(
        "Wrote {} characters of bulletin text to {}",
        text.chars().count(),
        out.display()
    );
    Ok(())
}

fn download(url: &str) -> Result<Vec<u8>, NivoError> {
    let response = reqwest::blocking::get(url).map_err(|e| NivoError::Fetch(e.to_string()))?;
    if !response.status().is_success() {
        return Err(NivoError::Fetch(format!(
            "{} returned HTTP {}",
            url,
            response.status()
        )));
    }
    let bytes = response.bytes().map_err(|e| NivoError::Fetch(e.to_string()))?;
    Ok(bytes.to_vec())
}
