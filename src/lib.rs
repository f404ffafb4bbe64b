//! Retrieval-augmented question answering over course materials.
//!
//! The crate is layered in the usual way: `domain` holds the entities
//! and the ports, `infrastructure` the adapters behind them, `api` the
//! HTTP facade and `cli` the executable entry points.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;
use std::time::Duration;

use crate::api::AppState;
use crate::config::AppConfig;
use crate::domain::DomainError;
use crate::infrastructure::document::CourseDocumentProcessor;
use crate::infrastructure::generation::{AnthropicGenerator, HttpClient};
use crate::infrastructure::services::RagService;
use crate::infrastructure::session::InMemorySessionStore;
use crate::infrastructure::vector_store::InMemoryVectorStore;

const GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Wire the full RAG system from configuration.
///
/// Requires `ANTHROPIC_API_KEY` in the environment; everything else
/// comes from [`AppConfig`].
pub fn build_rag_service(config: &AppConfig) -> Result<Arc<RagService>, DomainError> {
    let api_key = AppConfig::anthropic_api_key()
        .ok_or_else(|| DomainError::configuration("ANTHROPIC_API_KEY is not set"))?;

    let client = HttpClient::with_timeout(GENERATION_TIMEOUT)?;
    let generator = AnthropicGenerator::new(client, api_key, config.rag.model.clone());
    let processor = CourseDocumentProcessor::new(config.rag.chunk_size, config.rag.chunk_overlap)?;

    Ok(Arc::new(RagService::new(
        Arc::new(InMemoryVectorStore::new(config.rag.max_results)),
        Arc::new(generator),
        Arc::new(InMemorySessionStore::new(config.rag.max_history)),
        Arc::new(processor),
    )))
}

/// Application state for the HTTP facade
pub fn build_app_state(rag_service: Arc<RagService>) -> AppState {
    AppState::new(rag_service)
}
