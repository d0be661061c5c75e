//! Teacher aggregate
//!
//! Contains the Teacher entity, the roster view (teacher plus registered
//! students) and the repository interface.

pub mod model;
pub mod repository;

pub use model::{common_students, Teacher, TeacherRoster};
pub use repository::TeacherRepository;
