use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::translator::{
    ErrorTranslator,
    FieldErrorTranslator,
};
use crate::types::FALLBACK_FIELD;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the offending entry (e.g., "fields.email.messages")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load translation file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse translation file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Formats validation errors as a numbered list
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON path of a field entry; the reserved empty name is rendered quoted.
fn field_path(name: &str) -> String {
    if name.is_empty() { "fields.\"\"".to_string() } else { format!("fields.{name}") }
}

/// Translation tables for string error identifiers.
///
/// ```json
/// {
///   "fields": {
///     "email": { "messages": { "required": "Email is required" }, "default": "Invalid email" }
///   },
///   "fallback": { "messages": { "required": "This field is required" }, "default": "Invalid value" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationSettings {
    /// Per-field tables.
    pub fields: HashMap<String, FieldMessages>,

    /// Global fallback scope, used for fields without their own table and as
    /// the last link of every fallback chain.
    pub fallback: Option<FieldMessages>,
}

/// Messages of one field or of the fallback scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldMessages {
    /// Identifier to message.
    pub messages: HashMap<String, String>,

    /// Message used when no identifier matches.
    pub default: Option<String>,
}

impl FieldMessages {
    /// Pushes a `ValidationError` for every problem found under `path`.
    fn validate(&self, path: &str, errors: &mut Vec<ValidationError>) {
        if self.messages.keys().any(String::is_empty) {
            errors.push(ValidationError::new(
                format!("{path}.messages"),
                "Error identifiers cannot be empty. Use \"default\" for a catch-all message",
            ));
        }
    }

    /// Builds the table for one scope.
    fn to_translator(&self) -> ErrorTranslator<String> {
        let mut translator: ErrorTranslator<String> = self
            .messages
            .iter()
            .map(|(err, message)| (err.clone(), message.as_str()))
            .collect();
        if let Some(default) = &self.default {
            translator.set_default_translation(default.as_str());
        }
        translator
    }
}

impl TranslationSettings {
    /// # Errors
    /// - A field named with the reserved empty name
    /// - An empty error identifier
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let mut fields: Vec<(&String, &FieldMessages)> = self.fields.iter().collect();
        fields.sort_by_key(|(name, _)| *name);

        for (name, messages) in fields {
            if name == FALLBACK_FIELD {
                errors.push(ValidationError::new(
                    "fields",
                    "The empty field name is reserved. Please move these messages to \"fallback\"",
                ));
            }
            messages.validate(&field_path(name), &mut errors);
        }

        if let Some(fallback) = &self.fallback {
            fallback.validate("fallback", &mut errors);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Validates the settings and builds the field translator they describe.
    pub fn build(&self) -> Result<FieldErrorTranslator<String>, ConfigError> {
        self.validate().map_err(ConfigError::ValidationErrors)?;

        let mut translator = FieldErrorTranslator::new();
        for (name, messages) in &self.fields {
            translator.insert_field(name.clone(), messages.to_translator());
        }
        if let Some(fallback) = &self.fallback {
            translator.insert_field(FALLBACK_FIELD, fallback.to_translator());
        }

        tracing::debug!(fields = self.fields.len(), "Translation settings built");
        Ok(translator)
    }
}
