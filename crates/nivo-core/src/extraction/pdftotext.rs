use crate::error::NivoError;
use crate::extraction::{normalize_text, BulletinExtractor};
use std::io::Write;
use std::process::Command;

/// Extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -raw` for reading-order text; the bulletin is prose, so
/// layout reconstruction is not needed and the result is normalized into a
/// single flat string anyway.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletinExtractor for PdftotextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, NivoError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| NivoError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| NivoError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-raw")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NivoError::PdftotextNotFound
                } else {
                    NivoError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(NivoError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(normalize_text(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
