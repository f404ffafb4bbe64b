//! Request and response bodies for the query and courses endpoints

use serde::{Deserialize, Serialize};

use crate::domain::search::SourceReference;
use crate::infrastructure::services::{CourseAnalytics, QueryOutcome};

/// POST /api/query request body
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    /// Query text; may be empty, validation is not the facade's concern
    pub query: String,

    /// Existing session to continue; a fresh one is minted if absent
    #[serde(default)]
    pub session_id: Option<String>,
}

/// One citation in a query response
///
/// `url` is always present on the wire, null when no link is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    pub title: String,
    pub url: Option<String>,
}

impl From<SourceReference> for SourceLink {
    fn from(source: SourceReference) -> Self {
        Self {
            title: source.title,
            url: source.url,
        }
    }
}

/// POST /api/query response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    pub sources: Vec<SourceLink>,
    pub session_id: String,
}

impl From<QueryOutcome> for QueryResponse {
    fn from(outcome: QueryOutcome) -> Self {
        Self {
            answer: outcome.answer,
            sources: outcome.sources.into_iter().map(SourceLink::from).collect(),
            session_id: outcome.session_id.into(),
        }
    }
}

/// GET /api/courses response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseStats {
    pub total_courses: usize,
    pub course_titles: Vec<String>,
}

impl From<CourseAnalytics> for CourseStats {
    fn from(analytics: CourseAnalytics) -> Self {
        Self {
            total_courses: analytics.total_courses,
            course_titles: analytics.course_titles,
        }
    }
}
