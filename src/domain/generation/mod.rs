//! Answer generation port

use async_trait::async_trait;

use crate::domain::search::SearchHit;
use crate::domain::session::Exchange;
use crate::domain::DomainError;

/// Port for the generation backend
///
/// Given the query, the prior conversation and the retrieved context,
/// produce free-form answer text. The backend is trusted to
/// incorporate the retrieved context.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    async fn generate_response(
        &self,
        query: &str,
        history: &[Exchange],
        context: &[SearchHit],
    ) -> Result<String, DomainError>;
}
