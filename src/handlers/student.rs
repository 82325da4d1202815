//! Student CRUD handlers: list, create, read, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::schemas::{merge_update, StudentRequest, StudentResponse, UpdateStudentRequest};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

pub const CREATED_MESSAGE: &str = "create student";

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("invalid student id '{}'", id_str)))
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(v)| v).map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    })
}

#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    responses(
        (status = 200, description = "All students that are not deleted", body = Vec<StudentResponse>),
        (status = 404, description = "Students could not be queried", body = ErrorBody)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<StudentResponse>>, AppError> {
    // A failed listing is reported as 404; the cause only goes to the log.
    let students = state.store.list_students().await.map_err(|e| match e {
        AppError::Db(err) => {
            tracing::error!(error = %err, "failed to list students");
            AppError::NotFound("failed to get students".into())
        }
        other => other,
    })?;
    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student created", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed or invalid body", body = ErrorBody),
        (status = 413, description = "Body too large", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<StudentRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), AppError> {
    let new_student = body(payload)?.into_new_student()?;
    let student = state.store.create_student(new_student).await?;
    tracing::info!(id = student.id, "student created");
    Ok((StatusCode::OK, CREATED_MESSAGE))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "The student", body = StudentResponse),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Student not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<StudentResponse>, AppError> {
    let id = parse_id(&id_str)?;
    let student = state.store.get_student(id).await?;
    Ok(Json(student.into()))
}

#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student ID")),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "The merged student", body = StudentResponse),
        (status = 400, description = "Invalid id or body", body = ErrorBody),
        (status = 404, description = "Student not found", body = ErrorBody),
        (status = 413, description = "Body too large", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<UpdateStudentRequest>, JsonRejection>,
) -> Result<Json<StudentResponse>, AppError> {
    let id = parse_id(&id_str)?;
    let received = body(payload)?;
    received.validate()?;
    let existing = state.store.get_student(id).await?;
    let merged = merge_update(existing, &received);
    let student = state.store.update_student(&merged).await?;
    tracing::info!(id, "student updated");
    Ok(Json(student.into()))
}

#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "students",
    params(("id" = i64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "The deleted student", body = StudentResponse),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 404, description = "Student not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<StudentResponse>, AppError> {
    let id = parse_id(&id_str)?;
    let existing = state.store.get_student(id).await?;
    let student = state.store.delete_student(&existing).await?;
    tracing::info!(id, "student deleted");
    Ok(Json(student.into()))
}
