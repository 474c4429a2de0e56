//! # Quill Core
//!
//! The domain layer of the Quill starter.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the `Post` entity, its derived fields, and the validator/normalizer that
//! turns a loose candidate payload into a schema-valid record.

pub mod domain;
pub mod error;
pub mod validate;

pub use error::{FieldError, ValidationErrorKind, ValidationErrors};
pub use validate::{NewPost, PostUpdate, apply_update, validate_new};
