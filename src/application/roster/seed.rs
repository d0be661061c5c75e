//! Sample data for local development

use tracing::info;

use crate::domain::{DomainResult, RepositoryProvider};

pub const SAMPLE_TEACHERS: [&str; 2] = ["teacherken@gmail.com", "teacherjoe@gmail.com"];

pub const SAMPLE_STUDENTS: [&str; 6] = [
    "studentjon@gmail.com",
    "studenthon@gmail.com",
    "studentmary@gmail.com",
    "studentagnes@gmail.com",
    "studentmiche@gmail.com",
    "studentbob@gmail.com",
];

/// Make sure the sample teachers and students exist.
///
/// Safe to run repeatedly; existing rows (and their suspension state) are
/// left untouched and no registrations are created.
pub async fn seed_sample_data(repos: &dyn RepositoryProvider) -> DomainResult<()> {
    for email in SAMPLE_TEACHERS {
        repos.teachers().find_or_create(email).await?;
    }
    for email in SAMPLE_STUDENTS {
        repos.students().find_or_create(email).await?;
    }

    info!(
        "Seeded {} teachers and {} students",
        SAMPLE_TEACHERS.len(),
        SAMPLE_STUDENTS.len()
    );
    Ok(())
}
