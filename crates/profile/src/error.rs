//! Validation errors for profile payloads.
//!
//! | Error | Raised when |
//! |-------|-------------|
//! | [`InvalidName`](ProfileError::InvalidName) | `full_name` is shorter than 2 or longer than 120 characters |
//! | [`InvalidEmail`](ProfileError::InvalidEmail) | `email` is not shaped like `local@domain.tld` |
//! | [`InvalidUrl`](ProfileError::InvalidUrl) | a link field is not an absolute http(s) URL |
//! | [`FieldTooLong`](ProfileError::FieldTooLong) | a free-text field exceeds its column limit |
//!
//! Malformed tag entries never produce an error; they are dropped during
//! [`TagSet`](crate::TagSet) normalization.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("full_name must be between {min} and {max} characters, got {len}")]
    InvalidName { len: usize, min: usize, max: usize },

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("{field} is not a valid http(s) URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{field} exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}
