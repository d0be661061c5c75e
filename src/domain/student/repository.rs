//! Student repository interface

use async_trait::async_trait;

use super::Student;
use crate::domain::DomainResult;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// All students in storage order.
    async fn find_all(&self) -> DomainResult<Vec<Student>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Student>>;
    /// Students whose email is in `emails` and who are not suspended.
    async fn find_unsuspended_by_emails(&self, emails: &[String]) -> DomainResult<Vec<Student>>;
    /// Atomic lookup-or-insert by email.
    async fn find_or_create(&self, email: &str) -> DomainResult<Student>;
    /// Persist the mutable fields of an already stored student.
    async fn save(&self, student: &Student) -> DomainResult<()>;
}
