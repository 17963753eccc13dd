//! field-error-translator
//!
//! Turns validation output (field name to ordered error identifiers) into one
//! human readable message per field, using layered lookup tables:
//! exact match, field default, caller supplied fallbacks, then the global
//! fallback scope.

pub mod config;
pub mod translator;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use translator::{
    ErrorTranslator,
    FieldErrorTranslator,
};
pub use types::{
    ErrorKey,
    ErrorList,
    ErrorMap,
    FALLBACK_FIELD,
    TranslationResult,
};
