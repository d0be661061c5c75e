//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod registration_repository;
pub mod repository_provider;
pub mod student_repository;
pub mod teacher_repository;

pub use registration_repository::SeaOrmRegistrationRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use student_repository::SeaOrmStudentRepository;
pub use teacher_repository::SeaOrmTeacherRepository;
