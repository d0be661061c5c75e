//! # Roster Service
//!
//! REST service that lets teachers register students, find the students
//! they share, suspend students and work out who receives a notification.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Students, teachers, registrations and the repository traits
//! - **application**: `TeacherBusinessService` and sample-data seeding
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: HTTP API with Swagger documentation
//! - **server**: Runtime that wires everything together and serves it
//! - **shared**: Errors and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;

pub use application::TeacherBusinessService;
pub use server::{init_tracing, ServerHandle, ServerOptions};
