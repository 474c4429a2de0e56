//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostStatus;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("field is required")]
    MissingRequiredField,

    #[error("cannot be more than {limit} characters")]
    FieldTooLong { limit: usize },

    #[error("must be one of: {}", allowed.join(", "))]
    InvalidEnumValue { allowed: Vec<String> },
}

impl ValidationErrorKind {
    pub fn too_long(limit: usize) -> Self {
        Self::FieldTooLong { limit }
    }

    pub fn invalid_status() -> Self {
        Self::InvalidEnumValue {
            allowed: PostStatus::ALL.iter().map(|s| s.as_str().to_owned()).collect(),
        }
    }
}

/// A violation tied to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {kind}")]
pub struct FieldError {
    pub field: &'static str,
    pub kind: ValidationErrorKind,
}

/// The complete set of violations for one submitted payload.
///
/// Checks run independently and every violation is collected, so a caller
/// can surface all problems at once instead of fixing them one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("validation failed: {}", self.summary())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, field: &'static str, kind: ValidationErrorKind) {
        self.0.push(FieldError { field, kind });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All violations recorded against one field.
    pub fn for_field(&self, field: &str) -> Vec<&FieldError> {
        self.0.iter().filter(|e| e.field == field).collect()
    }

    /// Promote to a `Result`: `Ok(value)` when no violation was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }

    fn summary(&self) -> String {
        self.0
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_display_names_field_and_limit() {
        let err = FieldError {
            field: "title",
            kind: ValidationErrorKind::too_long(100),
        };
        assert_eq!(err.to_string(), "title: cannot be more than 100 characters");
    }

    #[test]
    fn invalid_status_lists_allowed_values() {
        let kind = ValidationErrorKind::invalid_status();
        assert_eq!(kind.to_string(), "must be one of: draft, published, archived");
    }

    #[test]
    fn error_set_collects_and_filters_by_field() {
        let mut errors = ValidationErrors::new();
        errors.push("title", ValidationErrorKind::MissingRequiredField);
        errors.push("content", ValidationErrorKind::too_long(5000));
        errors.push("title", ValidationErrorKind::too_long(100));

        assert_eq!(errors.for_field("title").len(), 2);
        assert_eq!(errors.for_field("content").len(), 1);
        assert!(errors.into_result(()).is_err());
    }
}
