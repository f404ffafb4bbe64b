//! HTTP request/response types and extractors

mod error;
mod json;
mod query;

pub use error::{ApiError, ErrorBody};
pub use json::Json;
pub use query::{CourseStats, QueryRequest, QueryResponse, SourceLink};
