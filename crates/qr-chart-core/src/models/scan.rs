//! Scan payload models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which encoding of the scanned text yielded the identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PayloadKind {
    /// JSON object payload with an `id`/`patientId` field
    Structured,
    /// Absolute URL carrying an `id`/`patientId` query parameter
    Link,
    /// Bare text taken verbatim as the identifier
    RawText,
}

impl PayloadKind {
    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            PayloadKind::Structured => "json",
            PayloadKind::Link => "url",
            PayloadKind::RawText => "text",
        }
    }
}

/// An identifier pulled out of scanned text, tagged with its source encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedId {
    /// The directory lookup key
    pub identifier: String,
    /// Encoding that matched
    pub kind: PayloadKind,
}

impl ExtractedId {
    pub fn new(identifier: impl Into<String>, kind: PayloadKind) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
        }
    }
}

/// One observed scan, as recorded in session history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanEvent {
    /// When the decoded text was observed
    pub at: DateTime<Utc>,
    /// Decoded text exactly as it arrived
    pub raw_text: String,
    /// Extraction outcome; `None` when no identifier was found
    pub extracted: Option<ExtractedId>,
}

impl ScanEvent {
    /// Record a scan observed now.
    pub fn now(raw_text: impl Into<String>, extracted: Option<ExtractedId>) -> Self {
        Self {
            at: Utc::now(),
            raw_text: raw_text.into(),
            extracted,
        }
    }
}
