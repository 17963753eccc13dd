//! Single-level identifier to message table.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use super::TranslateMode;
use crate::types::{
    ErrorKey,
    MESSAGE_SEPARATOR,
};

/// Maps error identifiers to human readable messages.
///
/// An optional default message answers every identifier without an exact
/// entry. Further tables can be chained at call time as fallbacks; they are
/// consulted only after both the exact entry and the default of this table
/// failed.
#[derive(Debug, Clone)]
pub struct ErrorTranslator<E> {
    /// Exact identifier entries.
    translations: HashMap<E, String>,
    /// Message stored under [`ErrorKey::Default`].
    default: Option<String>,
}

impl<E> Default for ErrorTranslator<E> {
    fn default() -> Self {
        Self { translations: HashMap::new(), default: None }
    }
}

impl<E: Eq + Hash> PartialEq for ErrorTranslator<E> {
    fn eq(&self, other: &Self) -> bool {
        self.translations == other.translations && self.default == other.default
    }
}

impl<E: Eq + Hash> Eq for ErrorTranslator<E> {}

impl<E: Eq + Hash> ErrorTranslator<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `message` under `key`, replacing any previous message.
    ///
    /// Passing [`ErrorKey::Default`] sets the default translation.
    pub fn add_translation(
        &mut self,
        key: impl Into<ErrorKey<E>>,
        message: impl Into<String>,
    ) -> &mut Self {
        let message = message.into();
        match key.into() {
            ErrorKey::Default => self.default = Some(message),
            ErrorKey::Error(err) => {
                self.translations.insert(err, message);
            }
        }
        self
    }

    /// Sets the message used when no exact identifier matches.
    pub fn set_default_translation(&mut self, message: impl Into<String>) -> &mut Self {
        self.add_translation(ErrorKey::Default, message)
    }

    /// Returns the exact entry for `err`, ignoring the default.
    #[must_use]
    pub fn translation<Q>(&self, err: &Q) -> Option<&str>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.translations.get(err).map(String::as_str)
    }

    #[must_use]
    pub fn default_translation(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Number of entries, the default included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.translations.len() + usize::from(self.default.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty() && self.default.is_none()
    }

    /// Resolves a single identifier.
    ///
    /// Lookup order: exact entry, this table's default, then `fallback` in
    /// order (each with the remaining tables as its own fallback).
    #[must_use]
    pub fn translate_error<'a, Q>(&'a self, err: &Q, fallback: &[&'a Self]) -> Option<&'a str>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(message) = self.translations.get(err).or(self.default.as_ref()) {
            return Some(message.as_str());
        }

        let (next, rest) = fallback.split_first()?;
        next.translate_error(err, rest)
    }

    /// Translates every resolvable identifier and joins the messages with `", "`.
    ///
    /// Unresolvable identifiers are skipped. Returns `None` when none resolved.
    #[must_use]
    pub fn translate(&self, errors: &[E], fallback: &[&Self]) -> Option<String> {
        self.translate_errors(errors, TranslateMode::All, fallback)
    }

    /// Returns the message of the first identifier that resolves.
    #[must_use]
    pub fn translate_first(&self, errors: &[E], fallback: &[&Self]) -> Option<String> {
        self.translate_errors(errors, TranslateMode::First, fallback)
    }

    /// Resolves `errors` in order and aggregates them according to `mode`.
    pub(crate) fn translate_errors(
        &self,
        errors: &[E],
        mode: TranslateMode,
        fallback: &[&Self],
    ) -> Option<String> {
        let mut messages = errors.iter().filter_map(|err| self.translate_error(err, fallback));

        match mode {
            TranslateMode::First => messages.next().map(str::to_owned),
            TranslateMode::All => {
                let messages: Vec<&str> = messages.collect();
                if messages.is_empty() { None } else { Some(messages.join(MESSAGE_SEPARATOR)) }
            }
        }
    }
}

impl<E: Eq + Hash, M: Into<String>> FromIterator<(E, M)> for ErrorTranslator<E> {
    fn from_iter<I: IntoIterator<Item = (E, M)>>(iter: I) -> Self {
        let mut translator = Self::new();
        translator.extend(iter);
        translator
    }
}

impl<E: Eq + Hash, M: Into<String>> Extend<(E, M)> for ErrorTranslator<E> {
    fn extend<I: IntoIterator<Item = (E, M)>>(&mut self, iter: I) {
        for (err, message) in iter {
            self.add_translation(err, message);
        }
    }
}
