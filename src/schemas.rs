//! Stored entity, request shapes and the response projection for students.

use crate::error::AppError;
use crate::service::validation::{require_text, validate_age, validate_email};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of the `students` table.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub age: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Validated insert shape; storage assigns id and timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub age: i32,
    pub active: bool,
}

/// Body of `POST /students`.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct StudentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub age: i32,
    /// Must be present; `false` is a real value.
    #[serde(default, alias = "registration")]
    pub active: Option<bool>,
}

impl StudentRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)?;
        require_text("cpf", &self.cpf)?;
        require_text("email", &self.email)?;
        validate_email("email", &self.email)?;
        validate_age("age", self.age)?;
        if self.active.is_none() {
            return Err(AppError::Validation("active is required".into()));
        }
        Ok(())
    }

    pub fn into_new_student(self) -> Result<NewStudent, AppError> {
        self.validate()?;
        let active = self
            .active
            .ok_or_else(|| AppError::Validation("active is required".into()))?;
        Ok(NewStudent {
            name: self.name,
            cpf: self.cpf,
            email: self.email,
            age: self.age,
            active,
        })
    }
}

/// Body of `PUT /students/{id}`. Absent fields, empty strings and a zero age keep the stored value.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateStudentRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default, alias = "registration")]
    pub active: Option<bool>,
}

/// The value as sent, unless it is absent or blank.
fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl UpdateStudentRequest {
    /// Checks only the fields that will be merged.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(email) = supplied(&self.email) {
            validate_email("email", email)?;
        }
        if let Some(age) = self.age.filter(|a| *a != 0) {
            validate_age("age", age)?;
        }
        Ok(())
    }
}

/// Merge an update into the stored record. Text fields and age are replaced only when
/// supplied with a non-empty / non-zero value; `active` is replaced whenever supplied.
pub fn merge_update(mut student: Student, update: &UpdateStudentRequest) -> Student {
    if let Some(name) = supplied(&update.name) {
        student.name = name.to_string();
    }
    if let Some(cpf) = supplied(&update.cpf) {
        student.cpf = cpf.to_string();
    }
    if let Some(email) = supplied(&update.email) {
        student.email = email.to_string();
    }
    if let Some(age) = update.age.filter(|a| *a != 0) {
        student.age = age;
    }
    if let Some(active) = update.active {
        student.active = active;
    }
    student
}

/// Read model returned to clients.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub age: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        StudentResponse {
            id: s.id,
            name: s.name,
            cpf: s.cpf,
            email: s.email,
            age: s.age,
            active: s.active,
            created_at: s.created_at,
            updated_at: s.updated_at,
            deleted_at: s.deleted_at,
        }
    }
}
