//! Router assembly: student CRUD, health checks, OpenAPI document and the HTTP middleware stack.

pub mod common;
pub mod docs;
pub mod student;

pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc};
pub use student::student_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::http::Uri;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies above this size are rejected with 413, with or without a Content-Length.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

async fn fallback(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

/// Full application router with request logging and panic recovery.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(docs_routes())
        .merge(student_routes(state))
        .fallback(fallback)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}
