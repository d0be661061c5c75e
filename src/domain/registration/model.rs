//! Registration domain entity

use crate::domain::teacher::Teacher;

/// "Teacher has registered student", with both ends resolved to emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: i32,
    pub teacher_email: String,
    pub student_email: String,
}

/// Result of registering a batch of students to one teacher.
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    pub teacher: Teacher,
    /// Associations inserted by this call
    pub created: usize,
    /// Pairs that were already registered and left untouched
    pub existing: usize,
}
