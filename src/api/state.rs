//! Application state for shared services

use std::sync::Arc;

use crate::domain::session::SessionId;
use crate::domain::DomainError;
use crate::infrastructure::services::{CourseAnalytics, QueryOutcome, RagService};

/// Application state containing the RAG system behind dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub rag_service: Arc<dyn RagServiceTrait>,
}

impl AppState {
    pub fn new(rag_service: Arc<dyn RagServiceTrait>) -> Self {
        Self { rag_service }
    }
}

/// Trait for the RAG operations the HTTP facade depends on
#[async_trait::async_trait]
pub trait RagServiceTrait: Send + Sync {
    async fn query(
        &self,
        text: &str,
        session_id: Option<SessionId>,
    ) -> Result<QueryOutcome, DomainError>;

    async fn get_course_analytics(&self) -> Result<CourseAnalytics, DomainError>;
}

#[async_trait::async_trait]
impl RagServiceTrait for RagService {
    async fn query(
        &self,
        text: &str,
        session_id: Option<SessionId>,
    ) -> Result<QueryOutcome, DomainError> {
        RagService::query(self, text, session_id).await
    }

    async fn get_course_analytics(&self) -> Result<CourseAnalytics, DomainError> {
        RagService::get_course_analytics(self).await
    }
}
