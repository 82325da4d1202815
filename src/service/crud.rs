//! CRUD execution against PostgreSQL.

use crate::config::DeletePolicy;
use crate::error::AppError;
use crate::schemas::{NewStudent, Student};
use crate::service::StudentStore;
use crate::store::STUDENTS_TABLE;
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, cpf, email, age, active, created_at, updated_at, deleted_at";

#[derive(Clone)]
pub struct PgStudentStore {
    pool: PgPool,
    delete_policy: DeletePolicy,
}

impl PgStudentStore {
    pub fn new(pool: PgPool, delete_policy: DeletePolicy) -> Self {
        PgStudentStore { pool, delete_policy }
    }

    fn not_found(id: i64) -> AppError {
        AppError::NotFound(format!("student {}", id))
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE deleted_at IS NULL ORDER BY id",
            COLUMNS, STUDENTS_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Student>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create_student(&self, student: NewStudent) -> Result<Student, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, cpf, email, age, active) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            STUDENTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(&student.name)
            .bind(&student.cpf)
            .bind(&student.email)
            .bind(student.age)
            .bind(student.active)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_student(&self, id: i64) -> Result<Student, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1 AND deleted_at IS NULL",
            COLUMNS, STUDENTS_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    async fn update_student(&self, student: &Student) -> Result<Student, AppError> {
        let sql = format!(
            "UPDATE {} SET name = $2, cpf = $3, email = $4, age = $5, active = $6, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING {}",
            STUDENTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id = student.id, "query");
        sqlx::query_as::<_, Student>(&sql)
            .bind(student.id)
            .bind(&student.name)
            .bind(&student.cpf)
            .bind(&student.email)
            .bind(student.age)
            .bind(student.active)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::not_found(student.id))
    }

    async fn delete_student(&self, student: &Student) -> Result<Student, AppError> {
        let sql = match self.delete_policy {
            DeletePolicy::Soft => format!(
                "UPDATE {} SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL RETURNING {}",
                STUDENTS_TABLE, COLUMNS
            ),
            DeletePolicy::Hard => format!(
                "DELETE FROM {} WHERE id = $1 RETURNING {}",
                STUDENTS_TABLE, COLUMNS
            ),
        };
        tracing::debug!(sql = %sql, id = student.id, policy = ?self.delete_policy, "query");
        sqlx::query_as::<_, Student>(&sql)
            .bind(student.id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::not_found(student.id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
