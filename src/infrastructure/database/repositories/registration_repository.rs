//! SeaORM implementation of RegistrationRepository

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use super::{student_repository, teacher_repository};
use crate::domain::registration::{Registration, RegistrationOutcome, RegistrationRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{registration, student, teacher};

pub struct SeaOrmRegistrationRepository {
    db: DatabaseConnection,
}

impl SeaOrmRegistrationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegistrationRepository for SeaOrmRegistrationRepository {
    async fn find_all(&self) -> DomainResult<Vec<Registration>> {
        let rows = registration::Entity::find()
            .order_by_asc(registration::Column::Id)
            .all(&self.db)
            .await?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let teacher_ids: HashSet<i32> = rows.iter().map(|r| r.teacher_id).collect();
        let student_ids: HashSet<i32> = rows.iter().map(|r| r.student_id).collect();

        let teachers: HashMap<i32, String> = teacher::Entity::find()
            .filter(teacher::Column::Id.is_in(teacher_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|t| (t.id, t.email))
            .collect();
        let students: HashMap<i32, String> = student::Entity::find()
            .filter(student::Column::Id.is_in(student_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s.email))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|r| {
                Some(Registration {
                    id: r.id,
                    teacher_email: teachers.get(&r.teacher_id)?.clone(),
                    student_email: students.get(&r.student_id)?.clone(),
                })
            })
            .collect())
    }

    async fn register(
        &self,
        teacher_email: &str,
        student_emails: &[String],
    ) -> DomainResult<RegistrationOutcome> {
        // Dropping `txn` on an early return rolls back everything below.
        let txn = self.db.begin().await?;

        let teacher = teacher_repository::find_or_insert(&txn, teacher_email).await?;

        let mut created = 0;
        let mut existing = 0;
        for email in student_emails {
            let student = student_repository::find_or_insert(&txn, email).await?;

            // Decided by lookup, not by the insert's affected-row count:
            // MySQL reports a duplicate under ON DUPLICATE KEY as one row.
            let already = registration::Entity::find()
                .filter(registration::Column::TeacherId.eq(teacher.id))
                .filter(registration::Column::StudentId.eq(student.id))
                .one(&txn)
                .await?
                .is_some();
            if already {
                debug!("{} already registered to {}", email, teacher_email);
                existing += 1;
                continue;
            }

            let link = registration::ActiveModel {
                teacher_id: Set(teacher.id),
                student_id: Set(student.id),
                ..Default::default()
            };
            registration::Entity::insert(link)
                .on_conflict(
                    OnConflict::columns([
                        registration::Column::TeacherId,
                        registration::Column::StudentId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(&txn)
                .await?;
            created += 1;
        }

        txn.commit().await?;

        Ok(RegistrationOutcome {
            teacher: teacher.into(),
            created,
            existing,
        })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::ConnectionTrait;

    use super::*;
    use crate::domain::student::StudentRepository;
    use crate::domain::DomainError;
    use crate::domain::teacher::TeacherRepository;
    use crate::infrastructure::database::repositories::{
        SeaOrmStudentRepository, SeaOrmTeacherRepository,
    };
    use crate::infrastructure::database::test_database;

    fn emails(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn register_creates_teacher_students_and_links() {
        let db = test_database().await;
        let repo = SeaOrmRegistrationRepository::new(db.clone());

        let outcome = repo
            .register("t@x.com", &emails(&["s1@x.com", "s2@x.com"]))
            .await
            .unwrap();

        assert_eq!(outcome.teacher.email, "t@x.com");
        assert_eq!(outcome.created, 2);
        assert_eq!(outcome.existing, 0);
        assert_eq!(SeaOrmStudentRepository::new(db.clone()).find_all().await.unwrap().len(), 2);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].teacher_email, "t@x.com");
        assert_eq!(all[0].student_email, "s1@x.com");
        assert_eq!(all[1].student_email, "s2@x.com");
    }

    #[tokio::test]
    async fn registering_the_same_pair_twice_keeps_one_row() {
        let db = test_database().await;
        let repo = SeaOrmRegistrationRepository::new(db);

        repo.register("t@x.com", &emails(&["s1@x.com"])).await.unwrap();
        let again = repo
            .register("t@x.com", &emails(&["s1@x.com", "s1@x.com"]))
            .await
            .unwrap();

        assert_eq!(again.created, 0);
        assert_eq!(again.existing, 2);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failure_midway_rolls_back_the_whole_registration() {
        let db = test_database().await;
        db.execute_unprepared(
            "CREATE TRIGGER reject_bad_student BEFORE INSERT ON students \
             WHEN NEW.email = 'bad@x.com' \
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .await
        .unwrap();
        let repo = SeaOrmRegistrationRepository::new(db.clone());

        let result = repo
            .register("t@x.com", &emails(&["ok@x.com", "bad@x.com"]))
            .await;

        assert!(matches!(result, Err(DomainError::Storage(_))));
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(SeaOrmTeacherRepository::new(db.clone()).find_all().await.unwrap().is_empty());
        assert!(SeaOrmStudentRepository::new(db).find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn counts_split_new_and_known_pairs() {
        let db = test_database().await;
        let repo = SeaOrmRegistrationRepository::new(db);

        repo.register("t@x.com", &emails(&["s1@x.com"])).await.unwrap();
        let outcome = repo
            .register("t@x.com", &emails(&["s1@x.com", "s2@x.com"]))
            .await
            .unwrap();

        assert_eq!(outcome.created, 1);
        assert_eq!(outcome.existing, 1);
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn empty_student_list_still_creates_teacher() {
        let db = test_database().await;
        let repo = SeaOrmRegistrationRepository::new(db.clone());

        let outcome = repo.register("t@x.com", &[]).await.unwrap();

        assert_eq!(outcome.created, 0);
        assert!(repo.find_all().await.unwrap().is_empty());
        let teachers = SeaOrmTeacherRepository::new(db).find_all().await.unwrap();
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].email, "t@x.com");
    }

    #[tokio::test]
    async fn existing_student_keeps_suspension_when_registered() {
        let db = test_database().await;
        let students = SeaOrmStudentRepository::new(db.clone());
        let mut s = students.find_or_create("s1@x.com").await.unwrap();
        s.suspend();
        students.save(&s).await.unwrap();

        SeaOrmRegistrationRepository::new(db)
            .register("t@x.com", &emails(&["s1@x.com"]))
            .await
            .unwrap();

        assert!(students.find_by_email("s1@x.com").await.unwrap().unwrap().suspended);
    }
}
