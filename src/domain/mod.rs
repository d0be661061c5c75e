//! Domain layer: entities, pure business rules and repository interfaces.

pub mod notification;
pub mod registration;
pub mod repositories;
pub mod student;
pub mod teacher;

pub use notification::{extract_mentions, merge_recipients};
pub use registration::{Registration, RegistrationOutcome, RegistrationRepository};
pub use repositories::{DomainResult, RepositoryProvider};
pub use student::{Student, StudentRepository};
pub use teacher::{common_students, Teacher, TeacherRepository, TeacherRoster};

pub use crate::shared::errors::DomainError;
