//! Roster DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Registration, Student, Teacher};

// ── Listings ────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub email: String,
    pub suspended: bool,
}

impl From<Student> for StudentDto {
    fn from(s: Student) -> Self {
        Self {
            email: s.email,
            suspended: s.suspended,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TeacherDto {
    pub email: String,
}

impl From<Teacher> for TeacherDto {
    fn from(t: Teacher) -> Self {
        Self { email: t.email }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegistrationDto {
    pub id: i32,
    /// Teacher email
    pub teacher: String,
    /// Student email
    pub student: String,
}

impl From<Registration> for RegistrationDto {
    fn from(r: Registration) -> Self {
        Self {
            id: r.id,
            teacher: r.teacher_email,
            student: r.student_email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentListResponse {
    pub students: Vec<StudentDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TeacherListResponse {
    pub teachers: Vec<TeacherDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegistrationListResponse {
    pub registrations: Vec<RegistrationDto>,
}

// ── Register ────────────────────────────────────────────────────

/// `students` must be present and an array, but may be empty.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Invalid payload"))]
    pub teacher: String,
    pub students: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// ── Common students ─────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommonStudentsResponse {
    pub students: Vec<String>,
}

/// Teacher emails from `teacher=a,b` and/or `teacher=a&teacher=b`.
///
/// Entries are trimmed; empty ones are dropped.
pub fn teacher_emails_from_query(pairs: &[(String, String)]) -> Vec<String> {
    pairs
        .iter()
        .filter(|(key, _)| key == "teacher")
        .flat_map(|(_, value)| value.split(','))
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(String::from)
        .collect()
}

// ── Suspend ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SuspendRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "No student email provided"))]
    pub student: String,
}

// ── Notifications ───────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NotificationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing teacher or notification"))]
    pub teacher: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing teacher or notification"))]
    pub notification: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipientsResponse {
    pub recipients: Vec<String>,
}
