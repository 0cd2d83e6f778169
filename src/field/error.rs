//! Field state error types.

/// Errors raised by form field operations.
///
/// These are programmer errors only. A value that fails its rule is recorded
/// on the field as an error message and never surfaces here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The field name is not declared on the form
    #[error("Field {name} does not exist in form {form}")]
    UnknownField { form: String, name: String },
}

/// Convenience type alias for Result with FormError
pub type FormResult<T> = Result<T, FormError>;
