//! HTTP service layer.
//!
//! Five routes: a liveness probe, a static greeting, a connection
//! diagnostic, schema introspection, and the validated write path.

mod config;
mod errors;
mod routes;
mod server;

pub use config::{ServerConfig, DATABASE_NAME_VAR, DATABASE_URL_VAR, PORT_VAR};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use routes::{api_routes, AppState, CreateRequestResponse, DiagnosticsResponse};
pub use server::{run, HttpServer};
