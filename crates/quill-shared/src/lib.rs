//! # Quill Shared
//!
//! Boundary types between the request-handling layer and the domain core:
//! request payload shapes, the serialized post view, and the standard
//! success/error response envelopes.

pub mod dto;
pub mod response;

pub use dto::{CreatePostRequest, PostResponse, UpdatePostRequest};
pub use response::{ApiResponse, ErrorResponse};
