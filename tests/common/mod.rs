#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use std::sync::Mutex;
use student_api::{AppError, AppState, DeletePolicy, NewStudent, Student, StudentStore};
use tower::ServiceExt;

/// In-memory stand-in for the PostgreSQL store.
pub struct MemoryStore {
    rows: Mutex<Vec<Student>>,
    policy: DeletePolicy,
}

impl MemoryStore {
    pub fn new(policy: DeletePolicy) -> Self {
        MemoryStore {
            rows: Mutex::new(Vec::new()),
            policy,
        }
    }

    fn next_id(rows: &[Student]) -> i64 {
        rows.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl StudentStore for MemoryStore {
    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|s| s.deleted_at.is_none()).cloned().collect())
    }

    async fn create_student(&self, student: NewStudent) -> Result<Student, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();
        let row = Student {
            id: Self::next_id(&rows),
            name: student.name,
            cpf: student.cpf,
            email: student.email,
            age: student.age,
            active: student.active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn get_student(&self, id: i64) -> Result<Student, AppError> {
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .find(|s| s.id == id && s.deleted_at.is_none())
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("student {}", id)))
    }

    async fn update_student(&self, student: &Student) -> Result<Student, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|s| s.id == student.id && s.deleted_at.is_none())
            .ok_or_else(|| AppError::NotFound(format!("student {}", student.id)))?;
        row.name = student.name.clone();
        row.cpf = student.cpf.clone();
        row.email = student.email.clone();
        row.age = student.age;
        row.active = student.active;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete_student(&self, student: &Student) -> Result<Student, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let pos = rows
            .iter()
            .position(|s| s.id == student.id && s.deleted_at.is_none())
            .ok_or_else(|| AppError::NotFound(format!("student {}", student.id)))?;
        match self.policy {
            DeletePolicy::Soft => {
                rows[pos].deleted_at = Some(Utc::now());
                Ok(rows[pos].clone())
            }
            DeletePolicy::Hard => Ok(rows.remove(pos)),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store whose every call fails like an unreachable database.
pub struct BrokenStore;

#[async_trait]
impl StudentStore for BrokenStore {
    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn create_student(&self, _student: NewStudent) -> Result<Student, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn get_student(&self, _id: i64) -> Result<Student, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn update_student(&self, _student: &Student) -> Result<Student, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn delete_student(&self, _student: &Student) -> Result<Student, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
}

pub fn app_with(store: impl StudentStore + 'static) -> Router {
    student_api::app(AppState::new(store))
}

pub fn memory_app() -> Router {
    app_with(MemoryStore::new(DeletePolicy::Soft))
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

pub const ANA: &str = r#"{"name":"Ana","email":"ana@x.com","cpf":"123","age":20,"active":true}"#;
