//! # Error Handling
//!
//! Error types for trust domain resolution and SPIFFE identity generation.
//!
//! Every operation in this crate is a pure computation, so none of these
//! errors is transient.

/// Custom result type for identity operations
pub type Result<T> = std::result::Result<T, IdentityError>;

/// Main error type for the identity core
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// An input required to build an identity was missing or malformed.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    /// Configuration could not be decoded or failed validation.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl IdentityError {
    /// Create an invalid argument error for the named field
    pub fn invalid_argument<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::InvalidArgument { field: field.into(), message: message.into() }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    /// Name of the offending field, if the error refers to one
    pub fn field(&self) -> Option<&str> {
        match self {
            IdentityError::InvalidArgument { field, .. } => Some(field.as_str()),
            IdentityError::Config { .. } => None,
        }
    }
}

impl From<validator::ValidationErrors> for IdentityError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = Vec::new();
        collect_validation_messages("", &errors, &mut fields);
        fields.sort();

        Self::config(format!("Validation failed: {}", fields.join("; ")))
    }
}

/// Flatten nested validation errors into `path: message` entries
fn collect_validation_messages(prefix: &str, errors: &validator::ValidationErrors, out: &mut Vec<String>) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() { field.to_string() } else { format!("{}.{}", prefix, field) };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let error_messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| e.message.as_ref().map_or("Invalid value".to_string(), |m| m.to_string()))
                    .collect();
                out.push(format!("{}: {}", path, error_messages.join(", ")));
            }
            ValidationErrorsKind::Struct(inner) => collect_validation_messages(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_validation_messages(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}
