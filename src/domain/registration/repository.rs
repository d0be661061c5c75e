//! Registration repository interface

use async_trait::async_trait;

use super::{Registration, RegistrationOutcome};
use crate::domain::DomainResult;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Registration>>;

    /// Find-or-create the teacher and every student, then associate them.
    ///
    /// Implementations must apply the whole batch atomically: either every
    /// association exists afterwards or none of the new ones do.
    async fn register(
        &self,
        teacher_email: &str,
        student_emails: &[String],
    ) -> DomainResult<RegistrationOutcome>;
}
