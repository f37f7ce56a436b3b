//! Identifier extraction from decoded QR text.
//!
//! Pipeline: decoded text → structured (JSON) attempt → link (URL) attempt
//! → raw-text fallback. Each attempt returns an `Option` that the
//! coordinator inspects in strict precedence order; malformed payloads are
//! expected inputs, not errors, so no attempt ever panics or raises.

mod link;
mod structured;

use tracing::debug;

use crate::models::{ExtractedId, PayloadKind};

/// Extractor for patient identifiers carried in scanned text.
///
/// Holds the recognized identifier field/parameter names in priority
/// order; the default is `id` before `patientId`.
pub struct Extractor {
    /// Field and query-parameter names, highest priority first
    keys: Vec<String>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Create an extractor with the default identifier keys.
    pub fn new() -> Self {
        Self {
            keys: vec!["id".into(), "patientId".into()],
        }
    }

    /// Append a custom identifier key at the lowest priority.
    pub fn add_key(&mut self, key: &str) {
        self.keys.push(key.into());
    }

    /// Recognized keys, highest priority first.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Extract an identifier from decoded QR text.
    ///
    /// Returns `None` only for absent, empty, or whitespace-only input.
    /// Any other text yields an identifier: from a JSON payload if one
    /// matches, else from an absolute URL's query, else the trimmed text
    /// itself.
    pub fn extract(&self, input: Option<&str>) -> Option<ExtractedId> {
        let raw = input?.trim();
        if raw.is_empty() {
            return None;
        }

        if let Some(id) = self.identifier_from_json(raw) {
            debug!(identifier = %id, "structured payload matched");
            return Some(ExtractedId::new(id, PayloadKind::Structured));
        }

        if let Some(id) = self.identifier_from_url(raw) {
            debug!(identifier = %id, "link payload matched");
            return Some(ExtractedId::new(id, PayloadKind::Link));
        }

        Some(ExtractedId::new(raw, PayloadKind::RawText))
    }
}

/// Extract an identifier with the default key set, dropping the payload kind.
pub fn extract_identifier(input: Option<&str>) -> Option<String> {
    Extractor::new().extract(input).map(|e| e.identifier)
}
