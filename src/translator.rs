//! Error message translators.
/// Identifier to message table
mod error;
/// Field name to table mapping
mod field;

pub use error::ErrorTranslator;
pub use field::FieldErrorTranslator;

/// How the messages of one error list are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TranslateMode {
    /// Join every translated message.
    All,
    /// Stop at the first translated message.
    First,
}
