//! SeaORM implementation of TeacherRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::domain::student::Student;
use crate::domain::teacher::{Teacher, TeacherRepository, TeacherRoster};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{registration, student, teacher};

pub struct SeaOrmTeacherRepository {
    db: DatabaseConnection,
}

impl SeaOrmTeacherRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach registered students to each teacher, in registration order.
    async fn load_rosters(
        &self,
        teachers: Vec<teacher::Model>,
        unsuspended_only: bool,
    ) -> DomainResult<Vec<TeacherRoster>> {
        if teachers.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = teachers.iter().map(|t| t.id).collect();
        let mut query = registration::Entity::find()
            .find_also_related(student::Entity)
            .filter(registration::Column::TeacherId.is_in(ids))
            .order_by_asc(registration::Column::Id);
        if unsuspended_only {
            query = query.filter(student::Column::Suspended.eq(false));
        }
        let rows = query.all(&self.db).await?;

        let index: HashMap<i32, usize> = teachers
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id, i))
            .collect();
        let mut rosters: Vec<TeacherRoster> = teachers
            .into_iter()
            .map(|t| TeacherRoster::new(t.into()))
            .collect();

        for (reg, student) in rows {
            let (Some(student), Some(&i)) = (student, index.get(&reg.teacher_id)) else {
                continue;
            };
            rosters[i].students.push(Student::from(student));
        }

        Ok(rosters)
    }
}

impl From<teacher::Model> for Teacher {
    fn from(m: teacher::Model) -> Self {
        Teacher {
            id: m.id,
            email: m.email,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Insert the teacher unless the email is taken, then read it back.
pub(crate) async fn find_or_insert<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> Result<teacher::Model, DbErr> {
    let now = Utc::now();
    let candidate = teacher::ActiveModel {
        email: Set(email.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    teacher::Entity::insert(candidate)
        .on_conflict(
            OnConflict::column(teacher::Column::Email)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    teacher::Entity::find()
        .filter(teacher::Column::Email.eq(email))
        .one(conn)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("teacher {}", email)))
}

#[async_trait]
impl TeacherRepository for SeaOrmTeacherRepository {
    async fn find_all(&self) -> DomainResult<Vec<Teacher>> {
        let teachers = teacher::Entity::find()
            .order_by_asc(teacher::Column::Id)
            .all(&self.db)
            .await?;
        Ok(teachers.into_iter().map(Teacher::from).collect())
    }

    async fn find_or_create(&self, email: &str) -> DomainResult<Teacher> {
        Ok(find_or_insert(&self.db, email).await?.into())
    }

    async fn find_with_students(&self, emails: &[String]) -> DomainResult<Vec<TeacherRoster>> {
        if emails.is_empty() {
            return Ok(Vec::new());
        }

        let teachers = teacher::Entity::find()
            .filter(teacher::Column::Email.is_in(emails.iter().cloned()))
            .order_by_asc(teacher::Column::Id)
            .all(&self.db)
            .await?;

        self.load_rosters(teachers, false).await
    }

    async fn find_with_unsuspended_students(
        &self,
        email: &str,
    ) -> DomainResult<Option<TeacherRoster>> {
        let Some(found) = teacher::Entity::find()
            .filter(teacher::Column::Email.eq(email))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load_rosters(vec![found], true).await?.pop())
    }
}
