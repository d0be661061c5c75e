//! Migration to create the registrations junction table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_students::Students;
use super::m20240101_000002_create_teachers::Teachers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Registrations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Registrations::TeacherId).integer().not_null())
                    .col(ColumnDef::new(Registrations::StudentId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registrations_teacher")
                            .from(Registrations::Table, Registrations::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registrations_student")
                            .from(Registrations::Table, Registrations::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per (teacher, student) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_registrations_teacher_student")
                    .table(Registrations::Table)
                    .col(Registrations::TeacherId)
                    .col(Registrations::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_registrations_student")
                    .table(Registrations::Table)
                    .col(Registrations::StudentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Registrations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Registrations {
    Table,
    Id,
    TeacherId,
    StudentId,
}
