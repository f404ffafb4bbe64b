//! Document processing port

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::course::{Course, CourseChunk};
use crate::domain::DomainError;

/// Metadata extracted from a course script header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMetadata {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
}

/// Port for the document processor collaborator
///
/// Parses course scripts into a [`Course`] plus its content chunks,
/// ready for vector store registration.
#[async_trait]
pub trait DocumentProcessor: Send + Sync {
    /// Split raw text into overlapping chunks of roughly the
    /// configured size
    fn chunk_text(&self, text: &str) -> Vec<String>;

    /// Extract course metadata from the document header
    fn extract_metadata(&self, text: &str) -> Result<CourseMetadata, DomainError>;

    /// Parse a course document into a course and its chunks
    async fn process_course_document(
        &self,
        path: &Path,
    ) -> Result<(Course, Vec<CourseChunk>), DomainError>;
}
