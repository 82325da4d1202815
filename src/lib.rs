//! Student API: REST CRUD over a PostgreSQL students table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod schemas;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, DeletePolicy};
pub use error::{AppError, ConfigError};
pub use routes::{app, common_routes, docs_routes, student_routes, ApiDoc};
pub use schemas::{
    merge_update, NewStudent, Student, StudentRequest, StudentResponse, UpdateStudentRequest,
};
pub use service::{PgStudentStore, StudentStore};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_students_table};
