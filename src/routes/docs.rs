//! OpenAPI document for the student endpoints.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::student;
use crate::schemas::{StudentRequest, StudentResponse, UpdateStudentRequest};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Student API", description = "CRUD over student records"),
    paths(student::list, student::create, student::read, student::update, student::delete),
    components(schemas(StudentRequest, UpdateStudentRequest, StudentResponse, ErrorBody, ErrorDetail)),
    tags((name = "students", description = "Student records"))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn docs_routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_student_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/students"));
        assert!(paths.contains_key("/students/{id}"));
    }
}
