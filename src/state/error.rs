//! State management-specific error types.

use crate::field::FormError;

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// A form operation failed
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    /// Focus points past the last field of a form
    #[error("No field at index {index} in {form}")]
    FieldIndexOutOfRange { form: String, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error: StateError = FormError::UnknownField {
            form: "simple".to_string(),
            name: "nmae".to_string(),
        }
        .into();
        assert!(matches!(error, StateError::Form(_)));
        assert!(error.to_string().contains("Form error"));
        assert!(error.to_string().contains("nmae"));

        let error = StateError::FieldIndexOutOfRange {
            form: "Simple form".to_string(),
            index: 7,
        };
        assert!(error.to_string().contains("index 7"));
        assert!(error.to_string().contains("Simple form"));
    }
}
