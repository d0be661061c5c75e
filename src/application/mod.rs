//! Application layer - business logic and use cases

pub mod roster;

pub use roster::{seed_sample_data, RegisterAck, TeacherBusinessService};
