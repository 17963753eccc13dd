//! Declarative translation tables loaded from JSON.
/// Translation file loader
mod loader;
/// Settings types and validation
mod types;

pub use loader::{
    load_from_path,
    load_translator,
};
pub use types::{
    ConfigError,
    FieldMessages,
    TranslationSettings,
    ValidationError,
};
