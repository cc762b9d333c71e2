//! Multi-language text field
//!
//! Mirrors the backend's JSONB column, e.g. `{"en": "Text", "th": "ข้อความ"}`.
//! `en` is the contractual default language; upstream data is not trusted to
//! honor that, so every lookup tolerates a missing or empty `en`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default language key, always tried before the first-available scan.
pub const DEFAULT_LANG: &str = "en";

/// A bag of translations keyed by locale token (`"en"`, `"th"`, `"de"`, ...).
///
/// Backed by an insertion-ordered map so the first-available fallback in
/// [`MultiLangText::get`] is deterministic. Locale keys are matched exactly:
/// requesting `"en-US"` will not find a value stored under `"en"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiLangText(pub Map<String, Value>);

impl MultiLangText {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Create a bag holding only the default-language text.
    pub fn with_default(text: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert(DEFAULT_LANG.to_string(), Value::String(text.into()));
        Self(map)
    }

    /// Set the text for a specific language.
    pub fn set(&mut self, lang: impl Into<String>, text: impl Into<String>) {
        self.0.insert(lang.into(), Value::String(text.into()));
    }

    /// Whether a language key exists (empty values count as present).
    pub fn has(&self, lang: &str) -> bool {
        self.0.contains_key(lang)
    }

    /// Whether every value in the bag is empty or non-text.
    pub fn is_empty(&self) -> bool {
        self.0
            .values()
            .all(|v| v.as_str().is_none_or(str::is_empty))
    }

    /// Resolve the text for `lang` with fallback logic.
    ///
    /// Priority: requested language, then [`DEFAULT_LANG`], then the first
    /// non-empty value in insertion order. An entry holding an empty string
    /// falls through exactly like a missing entry.
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.exact(lang)
            .or_else(|| self.exact(DEFAULT_LANG))
            .or_else(|| {
                self.0
                    .values()
                    .find_map(|v| v.as_str().filter(|s| !s.is_empty()))
            })
    }

    fn exact(&self, lang: &str) -> Option<&str> {
        self.0
            .get(lang)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Resolve a display string from an optional text bag.
///
/// Returns `fallback` when the bag is absent or holds no usable text.
/// Total and pure: never fails, never mutates its input.
pub fn localized_text(text: Option<&MultiLangText>, locale: &str, fallback: &str) -> String {
    match text.and_then(|t| t.get(locale)) {
        Some(s) => s.to_string(),
        None => fallback.to_string(),
    }
}
