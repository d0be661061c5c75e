//! Registration aggregate (teacher ↔ student association)

pub mod model;
pub mod repository;

pub use model::{Registration, RegistrationOutcome};
pub use repository::RegistrationRepository;
