//! Database entities module

pub mod registration;
pub mod student;
pub mod teacher;

pub use registration::Entity as Registration;
pub use student::Entity as Student;
pub use teacher::Entity as Teacher;
