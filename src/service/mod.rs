//! Data access for students and request validation rules.

pub mod crud;
pub mod validation;

pub use crud::PgStudentStore;

use crate::error::AppError;
use crate::schemas::{NewStudent, Student};
use async_trait::async_trait;

/// Typed CRUD over the students table. Reads never return soft-deleted rows.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All live students ordered by id.
    async fn list_students(&self) -> Result<Vec<Student>, AppError>;

    /// Insert and return the stored row with its id and timestamps.
    async fn create_student(&self, student: NewStudent) -> Result<Student, AppError>;

    /// `AppError::NotFound` when no live row has this id.
    async fn get_student(&self, id: i64) -> Result<Student, AppError>;

    /// Persist every mutable field of `student` and return the stored row.
    async fn update_student(&self, student: &Student) -> Result<Student, AppError>;

    /// Remove `student` according to the store's delete policy; returns the removed record.
    async fn delete_student(&self, student: &Student) -> Result<Student, AppError>;

    /// Connectivity check for readiness.
    async fn ping(&self) -> Result<(), AppError>;
}
