//! Shared HTTP plumbing

pub mod error;
pub mod messages;
pub mod validated_json;

pub use error::{ApiError, ErrorBody};
pub use validated_json::ValidatedJson;
