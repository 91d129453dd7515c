//! # Spec Errors
//!
//! Error types for document parsing and schema resolution.

use thiserror::Error;

/// Errors that can occur while reading or resolving the spec document.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The document is not valid YAML.
    #[error("Spec document is not valid YAML: {0}")]
    Syntax(#[from] serde_yaml::Error),

    /// The document root is not a mapping.
    #[error("Spec document root must be a mapping")]
    RootNotMapping,

    /// No recognized root key was found.
    #[error("No assembly section found (tried {tried:?})")]
    MissingRoot { tried: Vec<&'static str> },

    /// A required field is absent under every recognized alias.
    #[error("Missing required field: {path}")]
    MissingField { path: String },

    /// A field is present but carries an unusable value.
    #[error("Invalid value for {path}: expected {expected}, got {found}")]
    InvalidValue {
        path: String,
        expected: &'static str,
        found: String,
    },
}

impl SpecError {
    /// Creates a missing-field error with the canonical dotted path.
    pub fn missing(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    /// Creates an invalid-value error describing what was found instead.
    pub fn invalid(path: impl Into<String>, expected: &'static str, found: impl Into<String>) -> Self {
        Self::InvalidValue {
            path: path.into(),
            expected,
            found: found.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_path() {
        let err = SpecError::missing("trolley.tube.wall");
        assert!(err.to_string().contains("trolley.tube.wall"));
    }

    #[test]
    fn test_invalid_value_shows_expectation() {
        let err = SpecError::invalid("trolley.tube.length", "number", "string \"wide\"");
        let text = err.to_string();
        assert!(text.contains("expected number"));
        assert!(text.contains("wide"));
    }
}
