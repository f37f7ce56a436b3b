//! Structured (JSON) payload attempt.

use serde_json::Value;

use super::Extractor;

impl Extractor {
    /// Try the text as a JSON payload carrying an identifier field.
    ///
    /// Returns `None` for anything that is not valid JSON or holds no
    /// truthy identifier field; the caller falls through to the next
    /// encoding.
    pub fn identifier_from_json(&self, text: &str) -> Option<String> {
        let value: Value = serde_json::from_str(text).ok()?;
        self.keys()
            .iter()
            .find_map(|key| identifier_value(value.get(key)?))
    }
}

/// Read an identifier out of a JSON field, with the original page's
/// truthiness rules: non-empty strings and non-zero numbers carry an
/// identifier, `true` stringifies, everything else counts as absent.
fn identifier_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                None
            } else {
                Some(n.to_string())
            }
        }
        Value::Bool(true) => Some("true".into()),
        _ => None,
    }
}
