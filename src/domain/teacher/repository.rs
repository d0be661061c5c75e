//! Teacher repository interface

use async_trait::async_trait;

use super::{Teacher, TeacherRoster};
use crate::domain::DomainResult;

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Teacher>>;
    async fn find_or_create(&self, email: &str) -> DomainResult<Teacher>;
    /// Rosters for every known teacher in `emails`; unknown emails are skipped.
    async fn find_with_students(&self, emails: &[String]) -> DomainResult<Vec<TeacherRoster>>;
    /// Roster restricted to students that are not suspended.
    async fn find_with_unsuspended_students(&self, email: &str)
        -> DomainResult<Option<TeacherRoster>>;
}
