//! HTTP REST API interfaces
//!
//! - `common`: error mapping, response messages, validated JSON extractor
//! - `modules`: request handlers and middleware grouped by concern
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc};
