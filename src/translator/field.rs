//! Per-field translation tables with a global fallback scope.

use std::collections::HashMap;
use std::hash::Hash;

use super::{
    ErrorTranslator,
    TranslateMode,
};
use crate::types::{
    ErrorKey,
    ErrorMap,
    FALLBACK_FIELD,
    TranslationResult,
};

/// Maps field names to their own [`ErrorTranslator`].
///
/// The table stored under [`FALLBACK_FIELD`] is the global fallback scope: it
/// answers fields without a table of their own and is appended as the last
/// entry of every fallback chain.
#[derive(Debug, Clone)]
pub struct FieldErrorTranslator<E> {
    /// Tables keyed by field name, the fallback scope included.
    fields: HashMap<String, ErrorTranslator<E>>,
}

impl<E> Default for FieldErrorTranslator<E> {
    fn default() -> Self {
        Self { fields: HashMap::new() }
    }
}

impl<E: Eq + Hash> PartialEq for FieldErrorTranslator<E> {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl<E: Eq + Hash> Eq for FieldErrorTranslator<E> {}

impl<E: Eq + Hash> FieldErrorTranslator<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `message` for `key` on `field`, creating the field table on
    /// first use. An existing message for the same key is replaced.
    pub fn add_translation(
        &mut self,
        field: impl Into<String>,
        key: impl Into<ErrorKey<E>>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.fields.entry(field.into()).or_default().add_translation(key, message);
        self
    }

    /// Sets the message used for `field` when none of its errors match.
    pub fn set_field_default_translation(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.add_translation(field, ErrorKey::Default, message)
    }

    /// Registers `message` for `err` in the global fallback scope.
    pub fn set_fallback_translation(&mut self, err: E, message: impl Into<String>) -> &mut Self {
        self.add_translation(FALLBACK_FIELD, err, message)
    }

    /// Sets the last-resort message used when nothing else matches.
    pub fn set_fallback_default_translation(&mut self, message: impl Into<String>) -> &mut Self {
        self.add_translation(FALLBACK_FIELD, ErrorKey::Default, message)
    }

    /// Replaces the whole table of `field`.
    pub fn insert_field(
        &mut self,
        field: impl Into<String>,
        translator: ErrorTranslator<E>,
    ) -> &mut Self {
        self.fields.insert(field.into(), translator);
        self
    }

    /// Returns the table registered for `field`.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&ErrorTranslator<E>> {
        self.fields.get(field)
    }

    /// Returns the global fallback table.
    #[must_use]
    pub fn fallback(&self) -> Option<&ErrorTranslator<E>> {
        self.field(FALLBACK_FIELD)
    }

    /// Names of the fields with their own table, the fallback scope excluded.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str).filter(|name| *name != FALLBACK_FIELD)
    }

    /// Translates every error of every field and joins them per field.
    ///
    /// `fallback` tables are consulted before the global fallback scope.
    #[must_use]
    pub fn translate(
        &self,
        errors: &ErrorMap<E>,
        fallback: &[&ErrorTranslator<E>],
    ) -> TranslationResult {
        self.translate_error_map(errors, TranslateMode::All, fallback)
    }

    /// Same as [`Self::translate`] but keeps only the first translatable error
    /// of each field.
    #[must_use]
    pub fn translate_first(
        &self,
        errors: &ErrorMap<E>,
        fallback: &[&ErrorTranslator<E>],
    ) -> TranslationResult {
        self.translate_error_map(errors, TranslateMode::First, fallback)
    }

    /// Resolves each field against its own table or the fallback chain.
    fn translate_error_map(
        &self,
        errors: &ErrorMap<E>,
        mode: TranslateMode,
        fallback: &[&ErrorTranslator<E>],
    ) -> TranslationResult {
        // The global scope is always the last resort.
        let mut chain = fallback.to_vec();
        if let Some(global) = self.fallback() {
            chain.push(global);
        }

        let mut translations = HashMap::with_capacity(errors.len());
        let mut complete = true;

        for (field, errs) in errors {
            let (translator, rest) = if let Some(own) = self.fields.get(field) {
                (own, chain.as_slice())
            } else if let Some((first, rest)) = chain.split_first() {
                tracing::trace!(field = %field, "No table for field, using fallback chain");
                (*first, rest)
            } else {
                tracing::debug!(field = %field, "No translation table or fallback for field");
                complete = false;
                continue;
            };

            if let Some(message) = translator.translate_errors(errs, mode, rest) {
                translations.insert(field.clone(), message);
            } else {
                tracing::debug!(
                    field = %field,
                    errors = errs.len(),
                    "No translation found for field"
                );
                complete = false;
            }
        }

        TranslationResult::new(translations, complete)
    }
}
