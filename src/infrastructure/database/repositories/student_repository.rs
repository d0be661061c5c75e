//! SeaORM implementation of StudentRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use tracing::debug;

use crate::domain::student::{Student, StudentRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::student;

pub struct SeaOrmStudentRepository {
    db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<student::Model> for Student {
    fn from(m: student::Model) -> Self {
        Student {
            id: m.id,
            email: m.email,
            suspended: m.suspended,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Insert the student unless the email is taken, then read it back.
///
/// Runs on any connection so registration can call it inside its
/// transaction. The unique index on `email` makes concurrent callers
/// converge on the same row.
pub(crate) async fn find_or_insert<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> Result<student::Model, DbErr> {
    let now = Utc::now();
    let candidate = student::ActiveModel {
        email: Set(email.to_string()),
        suspended: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    student::Entity::insert(candidate)
        .on_conflict(
            OnConflict::column(student::Column::Email)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    student::Entity::find()
        .filter(student::Column::Email.eq(email))
        .one(conn)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("student {}", email)))
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn find_all(&self) -> DomainResult<Vec<Student>> {
        let students = student::Entity::find()
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await?;
        Ok(students.into_iter().map(Student::from).collect())
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Student>> {
        let found = student::Entity::find()
            .filter(student::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(found.map(Student::from))
    }

    async fn find_unsuspended_by_emails(&self, emails: &[String]) -> DomainResult<Vec<Student>> {
        if emails.is_empty() {
            return Ok(Vec::new());
        }

        let students = student::Entity::find()
            .filter(student::Column::Email.is_in(emails.iter().cloned()))
            .filter(student::Column::Suspended.eq(false))
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await?;
        Ok(students.into_iter().map(Student::from).collect())
    }

    async fn find_or_create(&self, email: &str) -> DomainResult<Student> {
        Ok(find_or_insert(&self.db, email).await?.into())
    }

    async fn save(&self, s: &Student) -> DomainResult<()> {
        let result = student::Entity::update_many()
            .col_expr(student::Column::Suspended, Expr::value(s.suspended))
            .col_expr(student::Column::UpdatedAt, Expr::value(s.updated_at))
            .filter(student::Column::Id.eq(s.id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            debug!("Saving student '{}' changed no rows", s.email);
        }
        Ok(())
    }
}
