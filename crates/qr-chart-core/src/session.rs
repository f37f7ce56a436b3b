//! Scan session controller.
//!
//! The original page kept the active scanner and camera in module-level
//! mutable globals; here that state is an explicit object owned by the
//! shell and handed to whatever feeds it decoded text.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::directory::PatientDirectory;
use crate::extract::Extractor;
use crate::models::{ExtractedId, PatientRecord, ScanEvent};

/// State for one scanning session.
pub struct ScanSession {
    /// Session id, for log correlation
    session_id: String,
    /// When the session was opened
    started_at: DateTime<Utc>,
    /// The extractor applied to every observed scan
    extractor: Extractor,
    /// Most recent scan, if any
    last: Option<ScanEvent>,
    /// All scans observed since open/clear
    history: Vec<ScanEvent>,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanSession {
    /// Open a session with the default extractor.
    pub fn new() -> Self {
        Self::with_extractor(Extractor::new())
    }

    /// Open a session with a custom extractor.
    pub fn with_extractor(extractor: Extractor) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            extractor,
            last: None,
            history: Vec::new(),
        }
    }

    /// Feed one decoded text into the session.
    ///
    /// Runs extraction, records the event, and returns the extraction
    /// outcome for the caller to act on.
    pub fn observe(&mut self, raw_text: &str) -> Option<&ExtractedId> {
        let extracted = self.extractor.extract(Some(raw_text));
        debug!(
            session_id = %self.session_id,
            identifier = extracted.as_ref().map(|e| e.identifier.as_str()),
            "scan observed"
        );
        let event = ScanEvent::now(raw_text, extracted);
        self.history.push(event.clone());
        self.last = Some(event);
        self.last.as_ref().and_then(|e| e.extracted.as_ref())
    }

    /// Record for the most recent extracted identifier, if the directory
    /// holds one.
    pub fn current_record<'a>(&self, directory: &'a PatientDirectory) -> Option<&'a PatientRecord> {
        let extracted = self.last.as_ref()?.extracted.as_ref()?;
        directory.lookup(Some(&extracted.identifier))
    }

    /// Most recent scan event.
    pub fn last_scan(&self) -> Option<&ScanEvent> {
        self.last.as_ref()
    }

    /// All scans observed since open/clear, oldest first.
    pub fn history(&self) -> &[ScanEvent] {
        &self.history
    }

    /// Number of scans observed since open/clear.
    pub fn scan_count(&self) -> usize {
        self.history.len()
    }

    /// Drop all recorded scans, keeping the session open.
    pub fn clear(&mut self) {
        self.last = None;
        self.history.clear();
    }

    /// Session id.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// When the session was opened.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
