//! Roster use-cases: teachers, students and their registrations.

pub mod seed;
pub mod service;

pub use seed::seed_sample_data;
pub use service::{RegisterAck, TeacherBusinessService, REGISTER_SUCCESS};
