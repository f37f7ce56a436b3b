//! Patient record models.

use serde::{Deserialize, Serialize};

/// Emergency contact attached to a patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyContact {
    /// Contact name
    pub name: String,
    /// Contact phone number
    pub phone: String,
}

/// A static patient record as held in the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientRecord {
    /// Directory key, e.g. "P1001"
    pub identifier: String,
    /// Patient name
    pub name: String,
    /// Sex as displayed (free text, e.g. "male")
    pub sex: String,
    /// Age in years
    pub age: u32,
    /// Known allergies; may be empty
    pub allergies: Vec<String>,
    /// Current medication descriptions; may be empty
    pub medications: Vec<String>,
    /// Diagnosis text
    pub diagnosis: String,
    /// Free-form clinical note
    pub note: String,
    /// Emergency contact
    pub emergency: EmergencyContact,
}

impl PatientRecord {
    /// Create a record with the required scalar fields and empty lists.
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        sex: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            sex: sex.into(),
            age,
            allergies: Vec::new(),
            medications: Vec::new(),
            diagnosis: String::new(),
            note: String::new(),
            emergency: EmergencyContact {
                name: String::new(),
                phone: String::new(),
            },
        }
    }

    /// Whether any allergies are recorded.
    pub fn has_allergies(&self) -> bool {
        !self.allergies.is_empty()
    }

    /// Whether any medications are recorded.
    pub fn has_medications(&self) -> bool {
        !self.medications.is_empty()
    }
}
