//! Link (URL) payload attempt.

use url::Url;

use super::Extractor;

impl Extractor {
    /// Try the text as an absolute URL carrying an identifier query
    /// parameter.
    ///
    /// Returns `None` when the text does not parse as an absolute URL or
    /// no recognized parameter has a non-empty value; the caller falls
    /// through to the raw-text fallback.
    pub fn identifier_from_url(&self, text: &str) -> Option<String> {
        let parsed = Url::parse(text).ok()?;
        self.keys().iter().find_map(|key| {
            parsed
                .query_pairs()
                .find(|(k, _)| k == key.as_str())
                .map(|(_, v)| v.into_owned())
                .filter(|v| !v.is_empty())
        })
    }
}
