//! Plain-text and JSON rendering of patient records.

use crate::models::PatientRecord;

/// Placeholder shown for empty allergy/medication lists.
const EMPTY_LIST: &str = "-";

/// Render a patient record as a labelled text card.
pub fn patient_card(record: &PatientRecord) -> String {
    let mut card = String::new();

    card.push_str(&format!("=== Patient Record [{}] ===\n", record.identifier));
    card.push_str(&format!("Name:        {}\n", record.name));
    card.push_str(&format!("Sex / Age:   {} / {}\n", record.sex, record.age));
    card.push_str(&format!("Diagnosis:   {}\n", record.diagnosis));

    card.push_str("Medications:\n");
    if record.has_medications() {
        for med in &record.medications {
            card.push_str(&format!("  - {med}\n"));
        }
    } else {
        card.push_str(&format!("  {EMPTY_LIST}\n"));
    }

    let allergies = if record.has_allergies() {
        record.allergies.join(", ")
    } else {
        EMPTY_LIST.to_string()
    };
    card.push_str(&format!("Allergies:   {allergies}\n"));

    card.push_str(&format!("Note:        {}\n", record.note));
    card.push_str(&format!(
        "Emergency:   {} ({})\n",
        record.emergency.name, record.emergency.phone
    ));

    card
}

/// Render a patient record as pretty JSON.
pub fn patient_json(record: &PatientRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

/// Placeholder text for the no-record state.
pub fn empty_hint() -> &'static str {
    "No matching patient record. Scan a QR code or enter an identifier."
}
