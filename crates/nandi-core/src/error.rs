//! Error types for the Nandi workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for every Nandi crate.
///
/// Wizard navigation problems get their own structured variants so callers
/// can tell a rejected operation apart from an infrastructure failure.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NandiError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A step index outside `0..total` was supplied.
    #[error("Invalid step index {index} (wizard has {total} steps)")]
    InvalidStepIndex { index: usize, total: usize },

    /// The wizard reached its terminal state and accepts no further mutation.
    #[error("Wizard already submitted")]
    AlreadySubmitted,

    /// The step does not declare the requested field.
    #[error("Field '{key}' is not declared on step {step}")]
    FieldNotFound { step: usize, key: String },

    /// A value was written with the wrong tag for its field.
    #[error("Field '{key}' expects a {expected} value, got {actual}")]
    FieldKindMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    /// A field on a step other than the current one was edited.
    #[error("Step {requested} is not editable while step {current} is current")]
    StepOutOfOrder { requested: usize, current: usize },

    /// The chat assistant does not offer this language.
    #[error("Language '{0}' is not available in chat")]
    UnsupportedLanguage(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error (including malformed rule tables and schemas)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Response template failed to render
    #[error("Template error: {0}")]
    Template(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NandiError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an InvalidStepIndex error
    pub fn invalid_step(index: usize, total: usize) -> Self {
        Self::InvalidStepIndex { index, total }
    }

    /// Creates a FieldNotFound error
    pub fn field_not_found(step: usize, key: impl Into<String>) -> Self {
        Self::FieldNotFound {
            step,
            key: key.into(),
        }
    }

    /// Creates an UnsupportedLanguage error
    pub fn unsupported_language(language: impl ToString) -> Self {
        Self::UnsupportedLanguage(language.to_string())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an InvalidStepIndex error
    pub fn is_invalid_step(&self) -> bool {
        matches!(self, Self::InvalidStepIndex { .. })
    }

    /// Check if this is an AlreadySubmitted error
    pub fn is_already_submitted(&self) -> bool {
        matches!(self, Self::AlreadySubmitted)
    }

    /// Check if this is an UnsupportedLanguage error
    pub fn is_unsupported_language(&self) -> bool {
        matches!(self, Self::UnsupportedLanguage(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for NandiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for NandiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for NandiError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for NandiError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<minijinja::Error> for NandiError {
    fn from(err: minijinja::Error) -> Self {
        Self::Template(err.to_string())
    }
}

/// A type alias for `Result<T, NandiError>`.
pub type Result<T> = std::result::Result<T, NandiError>;
