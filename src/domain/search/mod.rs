//! Retrieval types and the vector store port

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::course::{Course, CourseChunk};
use crate::domain::DomainError;

/// One ranked snippet returned by a vector store search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Snippet content
    pub content: String,

    /// Title of the course the snippet came from
    pub course_title: String,

    /// Lesson the snippet came from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_number: Option<u32>,

    /// Relevance score, higher is better
    pub score: f32,

    /// Link to the lesson page, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_link: Option<String>,

    /// Link to the course page, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_link: Option<String>,
}

impl SearchHit {
    /// Create a new search hit
    pub fn new(
        content: impl Into<String>,
        course_title: impl Into<String>,
        score: f32,
    ) -> Self {
        Self {
            content: content.into(),
            course_title: course_title.into(),
            lesson_number: None,
            score,
            lesson_link: None,
            course_link: None,
        }
    }

    /// Set the lesson number
    pub fn with_lesson_number(mut self, lesson_number: u32) -> Self {
        self.lesson_number = Some(lesson_number);
        self
    }

    /// Set the lesson link
    pub fn with_lesson_link(mut self, link: impl Into<String>) -> Self {
        self.lesson_link = Some(link.into());
        self
    }

    /// Set the course link
    pub fn with_course_link(mut self, link: impl Into<String>) -> Self {
        self.course_link = Some(link.into());
        self
    }

    /// Display title for citations: "Course - Lesson N" when a lesson
    /// is known, the course title otherwise
    pub fn citation_title(&self) -> String {
        match self.lesson_number {
            Some(n) => format!("{} - Lesson {}", self.course_title, n),
            None => self.course_title.clone(),
        }
    }

    /// Best available link for citations, preferring the lesson page
    pub fn citation_url(&self) -> Option<String> {
        self.lesson_link
            .clone()
            .or_else(|| self.course_link.clone())
    }
}

/// A display-only citation attached to an answer
///
/// Not persisted beyond the response. The `url` field is always
/// serialized, as null when no link is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReference {
    pub title: String,
    pub url: Option<String>,
}

impl SourceReference {
    /// Create a new source reference
    pub fn new(title: impl Into<String>, url: Option<String>) -> Self {
        Self {
            title: title.into(),
            url,
        }
    }
}

/// Port for the vector store collaborator
///
/// Searches return ranked snippets; the store applies its own result
/// cap. Registration methods are used by ingestion only.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Search indexed content, ranked by relevance descending
    async fn search_content(&self, query: &str) -> Result<Vec<SearchHit>, DomainError>;

    /// Number of indexed courses
    async fn get_course_count(&self) -> Result<usize, DomainError>;

    /// Titles of indexed courses, in ingestion order
    async fn get_existing_course_titles(&self) -> Result<Vec<String>, DomainError>;

    /// Register course metadata
    async fn add_course_metadata(&self, course: Course) -> Result<(), DomainError>;

    /// Register content chunks for retrieval
    async fn add_course_chunks(&self, chunks: Vec<CourseChunk>) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock vector store for testing
    ///
    /// Returns fixed search results and counts search calls.
    #[derive(Debug, Default)]
    pub struct MockVectorStore {
        hits: Vec<SearchHit>,
        titles: Vec<String>,
        search_count: AtomicUsize,
        fail_with: Mutex<Option<String>>,
    }

    impl MockVectorStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Set fixed search results, returned regardless of query
        pub fn with_hits(mut self, hits: Vec<SearchHit>) -> Self {
            self.hits = hits;
            self
        }

        /// Set indexed course titles
        pub fn with_titles(mut self, titles: Vec<&str>) -> Self {
            self.titles = titles.into_iter().map(String::from).collect();
            self
        }

        /// Make every operation fail with the given message
        pub fn failing(self, message: impl Into<String>) -> Self {
            *self.fail_with.lock().unwrap() = Some(message.into());
            self
        }

        /// Number of search calls so far
        pub fn search_count(&self) -> usize {
            self.search_count.load(Ordering::SeqCst)
        }

        fn check_failure(&self) -> Result<(), DomainError> {
            if let Some(message) = self.fail_with.lock().unwrap().clone() {
                return Err(DomainError::provider("vector-store", message));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl VectorStore for MockVectorStore {
        async fn search_content(&self, _query: &str) -> Result<Vec<SearchHit>, DomainError> {
            self.check_failure()?;
            self.search_count.fetch_add(1, Ordering::SeqCst);
            Ok(self.hits.clone())
        }

        async fn get_course_count(&self) -> Result<usize, DomainError> {
            self.check_failure()?;
            Ok(self.titles.len())
        }

        async fn get_existing_course_titles(&self) -> Result<Vec<String>, DomainError> {
            self.check_failure()?;
            Ok(self.titles.clone())
        }

        async fn add_course_metadata(&self, _course: Course) -> Result<(), DomainError> {
            self.check_failure()
        }

        async fn add_course_chunks(&self, _chunks: Vec<CourseChunk>) -> Result<(), DomainError> {
            self.check_failure()
        }
    }
}
