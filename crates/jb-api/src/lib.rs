//! # jb-api
//!
//! REST API layer for JobBoard RS: the job query handlers, the response
//! envelope, and the router. All store access goes through the `JobStore`
//! capability held in `AppState`.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use extractors::AppState;
