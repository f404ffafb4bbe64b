//! RAG orchestration service
//!
//! Coordinates session resolution, retrieval, generation and history
//! recording for a single query. Collaborator failures propagate
//! unchanged; there are no retries and no partial responses.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::course::Course;
use crate::domain::document::DocumentProcessor;
use crate::domain::generation::AnswerGenerator;
use crate::domain::search::{SearchHit, SourceReference, VectorStore};
use crate::domain::session::{SessionId, SessionStore};
use crate::domain::DomainError;

/// Result of answering one query
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub answer: String,
    pub sources: Vec<SourceReference>,
    pub session_id: SessionId,
}

/// Projection of indexed-course metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseAnalytics {
    pub total_courses: usize,
    pub course_titles: Vec<String>,
}

/// The RAG system: query orchestration plus ingestion entry points
pub struct RagService {
    vector_store: Arc<dyn VectorStore>,
    generator: Arc<dyn AnswerGenerator>,
    sessions: Arc<dyn SessionStore>,
    processor: Arc<dyn DocumentProcessor>,
}

impl RagService {
    pub fn new(
        vector_store: Arc<dyn VectorStore>,
        generator: Arc<dyn AnswerGenerator>,
        sessions: Arc<dyn SessionStore>,
        processor: Arc<dyn DocumentProcessor>,
    ) -> Self {
        Self {
            vector_store,
            generator,
            sessions,
            processor,
        }
    }

    /// Answer a query, resolving or minting the session as needed
    pub async fn query(
        &self,
        text: &str,
        session_id: Option<SessionId>,
    ) -> Result<QueryOutcome, DomainError> {
        let session_id = match session_id {
            Some(id) => id,
            None => self.sessions.create_session().await?,
        };

        let history = self.sessions.get_conversation_history(&session_id).await?;
        let hits = self.vector_store.search_content(text).await?;

        info!(
            session_id = %session_id,
            hits = hits.len(),
            history = history.len(),
            "Answering query"
        );

        let answer = self
            .generator
            .generate_response(text, &history, &hits)
            .await?;

        let sources = derive_sources(&hits);

        self.sessions
            .add_exchange(&session_id, text, &answer)
            .await?;

        Ok(QueryOutcome {
            answer,
            sources,
            session_id,
        })
    }

    /// Read current indexed-course metadata; pure projection
    pub async fn get_course_analytics(&self) -> Result<CourseAnalytics, DomainError> {
        let course_titles = self.vector_store.get_existing_course_titles().await?;

        Ok(CourseAnalytics {
            total_courses: course_titles.len(),
            course_titles,
        })
    }

    /// Ingest a single course document, registering the course and
    /// its chunks with the vector store
    pub async fn add_course_document(
        &self,
        path: &Path,
    ) -> Result<(Course, usize), DomainError> {
        let (course, chunks) = self.processor.process_course_document(path).await?;
        let chunk_count = chunks.len();

        self.vector_store.add_course_metadata(course.clone()).await?;
        self.vector_store.add_course_chunks(chunks).await?;

        info!(course = %course.title, chunks = chunk_count, "Ingested course document");
        Ok((course, chunk_count))
    }

    /// Ingest every readable course document in a folder, skipping
    /// courses already present in the store
    ///
    /// Returns (courses added, chunks added). Unreadable or malformed
    /// files are logged and skipped rather than aborting the run.
    pub async fn add_course_folder(&self, path: &Path) -> Result<(usize, usize), DomainError> {
        let existing: std::collections::HashSet<String> = self
            .vector_store
            .get_existing_course_titles()
            .await?
            .into_iter()
            .collect();

        let mut entries = tokio::fs::read_dir(path).await.map_err(|e| {
            DomainError::document(format!("failed to read {}: {}", path.display(), e))
        })?;

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            DomainError::document(format!("failed to read {}: {}", path.display(), e))
        })? {
            let file_path = entry.path();
            let is_script = file_path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| matches!(e, "txt" | "md"));

            if is_script {
                files.push(file_path);
            }
        }

        // Deterministic ingestion order
        files.sort();

        let mut courses_added = 0;
        let mut chunks_added = 0;

        for file in files {
            let (course, chunks) = match self.processor.process_course_document(&file).await {
                Ok(processed) => processed,
                Err(e) => {
                    warn!(file = %file.display(), error = %e, "Skipping unreadable course document");
                    continue;
                }
            };

            if existing.contains(&course.title) {
                info!(course = %course.title, "Course already indexed, skipping");
                continue;
            }

            let chunk_count = chunks.len();
            self.vector_store.add_course_metadata(course).await?;
            self.vector_store.add_course_chunks(chunks).await?;

            courses_added += 1;
            chunks_added += chunk_count;
        }

        info!(
            folder = %path.display(),
            courses = courses_added,
            chunks = chunks_added,
            "Folder ingestion complete"
        );

        Ok((courses_added, chunks_added))
    }
}

/// One source reference per distinct (course, lesson) in rank order
fn derive_sources(hits: &[SearchHit]) -> Vec<SourceReference> {
    let mut seen = std::collections::HashSet::new();
    let mut sources = Vec::new();

    for hit in hits {
        let title = hit.citation_title();

        if seen.insert(title.clone()) {
            sources.push(SourceReference::new(title, hit.citation_url()));
        }
    }

    sources
}
