//! Static patient directory.
//!
//! The directory is an in-memory table populated once at startup, either
//! from the built-in demo records or from a JSON file, and read-only for
//! the life of the process. Lookups never fail: an unknown identifier is
//! an expected result, not an error.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::models::{EmergencyContact, PatientRecord};

/// Directory construction errors.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate identifier: {0}")]
    DuplicateIdentifier(String),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Mapping from identifier to patient record.
///
/// Invariant: every key equals the `identifier` field of its record,
/// enforced by taking the key from the record on insert.
#[derive(Debug, Default)]
pub struct PatientDirectory {
    records: HashMap<String, PatientRecord>,
}

impl PatientDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Build a directory from a JSON array of patient records.
    pub fn from_json(json: &str) -> DirectoryResult<Self> {
        let records: Vec<PatientRecord> = serde_json::from_str(json)?;
        let mut directory = Self::new();
        for record in records {
            directory.insert(record)?;
        }
        Ok(directory)
    }

    /// Insert a record, keyed by its own identifier.
    pub fn insert(&mut self, record: PatientRecord) -> DirectoryResult<()> {
        if self.records.contains_key(&record.identifier) {
            return Err(DirectoryError::DuplicateIdentifier(record.identifier));
        }
        self.records.insert(record.identifier.clone(), record);
        Ok(())
    }

    /// Look up a record by identifier.
    ///
    /// `None` in or an unknown identifier yields `None`.
    pub fn lookup(&self, identifier: Option<&str>) -> Option<&PatientRecord> {
        let id = identifier?;
        let found = self.records.get(id);
        if found.is_none() {
            debug!(identifier = %id, "directory miss");
        }
        found
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records, in no particular order.
    pub fn records(&self) -> impl Iterator<Item = &PatientRecord> {
        self.records.values()
    }

    /// The built-in demo directory: two hardcoded records.
    pub fn demo() -> Self {
        let mut records = HashMap::new();
        for record in demo_records() {
            records.insert(record.identifier.clone(), record);
        }
        Self { records }
    }
}

/// The two demo records shipped with the original page.
fn demo_records() -> Vec<PatientRecord> {
    vec![
        PatientRecord {
            identifier: "P1001".into(),
            name: "Ming Wang".into(),
            sex: "male".into(),
            age: 34,
            allergies: vec!["penicillin".into()],
            medications: vec!["Metformin 500mg BID".into()],
            diagnosis: "Type 2 diabetes".into(),
            note: "Pre-meal glucose monitoring; hypoglycemia education completed".into(),
            emergency: EmergencyContact {
                name: "Mrs. Wang".into(),
                phone: "0912-345-678".into(),
            },
        },
        PatientRecord {
            identifier: "P2002".into(),
            name: "Yi-Chun Lin".into(),
            sex: "female".into(),
            age: 57,
            allergies: vec!["peanuts".into()],
            medications: vec![
                "Amlodipine 5mg QD".into(),
                "Atorvastatin 20mg QHS".into(),
            ],
            diagnosis: "Hypertension, hyperlipidemia".into(),
            note: "Keeps a blood-pressure diary; takes evening doses after 10pm".into(),
            emergency: EmergencyContact {
                name: "Mr. Lin".into(),
                phone: "0987-111-222".into(),
            },
        },
    ]
}
