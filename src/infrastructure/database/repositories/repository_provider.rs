//! SeaORM implementation of RepositoryProvider

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

use crate::domain::registration::RegistrationRepository;
use crate::domain::repositories::{DomainResult, RepositoryProvider};
use crate::domain::student::StudentRepository;
use crate::domain::teacher::TeacherRepository;

use super::registration_repository::SeaOrmRegistrationRepository;
use super::student_repository::SeaOrmStudentRepository;
use super::teacher_repository::SeaOrmTeacherRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let student = repos.students().find_by_email("studentjon@gmail.com").await?;
/// repos.registrations().register("teacherken@gmail.com", &students).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    db: DatabaseConnection,
    students: SeaOrmStudentRepository,
    teachers: SeaOrmTeacherRepository,
    registrations: SeaOrmRegistrationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            students: SeaOrmStudentRepository::new(db.clone()),
            teachers: SeaOrmTeacherRepository::new(db.clone()),
            registrations: SeaOrmRegistrationRepository::new(db.clone()),
            db,
        }
    }
}

#[async_trait]
impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn students(&self) -> &dyn StudentRepository {
        &self.students
    }

    fn teachers(&self) -> &dyn TeacherRepository {
        &self.teachers
    }

    fn registrations(&self) -> &dyn RegistrationRepository {
        &self.registrations
    }

    async fn ping(&self) -> DomainResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
