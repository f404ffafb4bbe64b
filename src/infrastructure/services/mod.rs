//! Application services

mod rag_service;

pub use rag_service::{CourseAnalytics, QueryOutcome, RagService};
