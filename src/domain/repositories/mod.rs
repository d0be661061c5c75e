//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use async_trait::async_trait;

use super::registration::RegistrationRepository;
use super::student::StudentRepository;
use super::teacher::TeacherRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Constructed once at startup around the database connection and passed
/// to whoever needs storage:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let student = repos.students().find_by_email("studentjon@gmail.com").await?;
///     let rosters = repos.teachers().find_with_students(&emails).await?;
/// }
/// ```
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    fn students(&self) -> &dyn StudentRepository;
    fn teachers(&self) -> &dyn TeacherRepository;
    fn registrations(&self) -> &dyn RegistrationRepository;

    /// Round-trip to the backing store, used by health checks.
    async fn ping(&self) -> DomainResult<()>;
}
