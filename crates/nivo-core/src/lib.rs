pub mod error;
pub mod extract;
pub mod extraction;
pub mod locate;
pub mod model;
pub mod registry;
pub mod resolve;

use error::NivoError;
use extraction::BulletinExtractor;
use registry::Registry;
use resolve::outcome::ResolutionResult;

/// Main API entry point: resolve a bulletin PDF into per-massif risk
/// results.
pub fn resolve_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn BulletinExtractor,
    registry: &Registry,
) -> Result<ResolutionResult, NivoError> {
    let text = extractor.extract_text(pdf_bytes)?;
    Ok(resolve_text(&text, registry))
}

/// Resolve an already-extracted, normalized bulletin text.
///
/// Pure over its inputs: identical text and registry yield identical
/// results, so re-running resolution is idempotent.
pub fn resolve_text(text: &str, registry: &Registry) -> ResolutionResult {
    ResolutionResult {
        massifs: resolve::resolve_all(registry, text),
    }
}
