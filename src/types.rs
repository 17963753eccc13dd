//! Core types shared by the translators.

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

/// Field name reserved for the global fallback scope.
///
/// Translations registered under this name apply to every field that has no
/// table of its own. It is never translated as a real field.
pub const FALLBACK_FIELD: &str = "";

/// Separator used when several messages are joined for one field.
pub const MESSAGE_SEPARATOR: &str = ", ";

/// Key of a single translation entry.
///
/// `Default` is the "no specific identifier" sentinel. Being a separate
/// variant, it can never collide with a real identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKey<E> {
    /// Matches any identifier that has no exact entry.
    Default,
    /// Matches exactly this identifier.
    Error(E),
}

impl<E> From<E> for ErrorKey<E> {
    fn from(err: E) -> Self {
        Self::Error(err)
    }
}

/// Ordered identifiers reported for one field.
pub type ErrorList<E> = Vec<E>;

/// Validation output: field name to its ordered identifiers.
pub type ErrorMap<E> = HashMap<String, ErrorList<E>>;

/// Messages produced by a field translation.
///
/// Fields that could not be translated have no entry. `complete` is true only
/// when every field of the input produced a message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// Field name to message.
    translations: HashMap<String, String>,
    /// Every input field produced a message.
    complete: bool,
}

impl TranslationResult {
    /// Wraps the collected messages and the completeness flag.
    pub(crate) const fn new(translations: HashMap<String, String>, complete: bool) -> Self {
        Self { translations, complete }
    }

    /// Returns the message for `field`, if one was produced.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.translations.get(field).map(String::as_str)
    }

    /// Field name to message, for every translated field.
    #[must_use]
    pub const fn translations(&self) -> &HashMap<String, String> {
        &self.translations
    }

    /// Whether every input field was translated.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of translated fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// Whether no field was translated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Splits into the message map and the completeness flag.
    #[must_use]
    pub fn into_parts(self) -> (HashMap<String, String>, bool) {
        (self.translations, self.complete)
    }
}
