//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_students;
mod m20240101_000002_create_teachers;
mod m20240101_000003_create_registrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_students::Migration),
            Box::new(m20240101_000002_create_teachers::Migration),
            Box::new(m20240101_000003_create_registrations::Migration),
        ]
    }
}
