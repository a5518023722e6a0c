pub mod pdftotext;

use crate::error::NivoError;

/// Trait for bulletin text extraction backends.
pub trait BulletinExtractor: Send + Sync {
    /// Extract the bulletin body from PDF bytes as one normalized string.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, NivoError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Collapse whitespace runs (including page breaks) into single spaces,
/// keeping diacritics intact, so downstream matching operates on one flat
/// string.
pub fn normalize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = true;
    for c in raw.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}
