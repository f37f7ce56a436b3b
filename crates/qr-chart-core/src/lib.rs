//! QR-Chart Core Library
//!
//! Patient lookup from scanned QR text: classify the decoded payload,
//! pull out an identifier, and resolve it against a static in-memory
//! directory.
//!
//! # Architecture
//!
//! ```text
//! Decoded QR text (camera / image decoder — external)
//!         │
//!         ▼
//!   Identifier Extractor
//!   JSON payload → URL query → raw text   (strict precedence)
//!         │
//!         ▼
//!   Patient Directory (read-only, populated at startup)
//!         │
//!         ▼
//!   Rendering (text card / JSON) → shell
//! ```
//!
//! # Core Principle
//!
//! **Extraction never fails.** Malformed JSON and malformed URLs are
//! expected payloads, not errors: each attempt falls through silently
//! and the trimmed text itself is the identifier of last resort. The
//! only way to get nothing back is to scan nothing.
//!
//! # Modules
//!
//! - [`models`]: Domain types (PatientRecord, ExtractedId, ScanEvent)
//! - [`extract`]: Tri-modal identifier extractor
//! - [`directory`]: Static identifier → record table
//! - [`session`]: Scan session state owned by the shell
//! - [`render`]: Text-card and JSON presentation helpers

pub mod directory;
pub mod extract;
pub mod models;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use directory::{DirectoryError, PatientDirectory};
pub use extract::{extract_identifier, Extractor};
pub use models::{EmergencyContact, ExtractedId, PatientRecord, PayloadKind, ScanEvent};
pub use session::ScanSession;
