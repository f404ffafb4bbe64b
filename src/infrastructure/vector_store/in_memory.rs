//! In-memory vector store for development and testing

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::course::{Course, CourseChunk};
use crate::domain::search::{SearchHit, VectorStore};
use crate::domain::DomainError;

/// In-memory vector store with keyword-overlap scoring
///
/// Not a real embedding index: chunks are scored by the fraction of
/// query terms they contain. Ranking is descending by score with ties
/// resolved by insertion order, capped at `max_results`.
pub struct InMemoryVectorStore {
    max_results: usize,
    courses: RwLock<Vec<Course>>,
    chunks: RwLock<Vec<CourseChunk>>,
}

impl InMemoryVectorStore {
    /// Create a new store returning at most `max_results` hits
    pub fn new(max_results: usize) -> Self {
        Self {
            max_results,
            courses: RwLock::new(Vec::new()),
            chunks: RwLock::new(Vec::new()),
        }
    }

    /// Number of indexed chunks
    pub async fn chunk_count(&self) -> usize {
        self.chunks.read().await.len()
    }

    fn terms(text: &str) -> HashSet<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }

    fn score(query_terms: &HashSet<String>, content: &str) -> f32 {
        if query_terms.is_empty() {
            return 0.0;
        }

        let chunk_terms = Self::terms(content);
        let matched = query_terms
            .iter()
            .filter(|t| chunk_terms.contains(*t))
            .count();

        matched as f32 / query_terms.len() as f32
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn search_content(&self, query: &str) -> Result<Vec<SearchHit>, DomainError> {
        let query_terms = Self::terms(query);
        let chunks = self.chunks.read().await;
        let courses = self.courses.read().await;

        let mut scored: Vec<(f32, usize)> = chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| (Self::score(&query_terms, &chunk.content), i))
            .filter(|(score, _)| *score > 0.0)
            .collect();

        // Stable sort keeps insertion order for equal scores
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(self.max_results);

        let hits = scored
            .into_iter()
            .map(|(score, i)| {
                let chunk = &chunks[i];
                let mut hit = SearchHit::new(&chunk.content, &chunk.course_title, score);

                let course = courses.iter().find(|c| c.title == chunk.course_title);

                if let Some(link) = course.and_then(|c| c.course_link.clone()) {
                    hit = hit.with_course_link(link);
                }

                if let Some(lesson_number) = chunk.lesson_number {
                    hit = hit.with_lesson_number(lesson_number);

                    let lesson_link = course
                        .and_then(|c| c.lesson(lesson_number))
                        .and_then(|l| l.lesson_link.clone());
                    if let Some(link) = lesson_link {
                        hit = hit.with_lesson_link(link);
                    }
                }

                hit
            })
            .collect();

        Ok(hits)
    }

    async fn get_course_count(&self) -> Result<usize, DomainError> {
        Ok(self.courses.read().await.len())
    }

    async fn get_existing_course_titles(&self) -> Result<Vec<String>, DomainError> {
        Ok(self
            .courses
            .read()
            .await
            .iter()
            .map(|c| c.title.clone())
            .collect())
    }

    async fn add_course_metadata(&self, course: Course) -> Result<(), DomainError> {
        let mut courses = self.courses.write().await;

        // Titles are unique identifiers; re-ingestion replaces
        if let Some(existing) = courses.iter_mut().find(|c| c.title == course.title) {
            *existing = course;
        } else {
            debug!(course = %course.title, "Registered course metadata");
            courses.push(course);
        }

        Ok(())
    }

    async fn add_course_chunks(&self, chunks: Vec<CourseChunk>) -> Result<(), DomainError> {
        self.chunks.write().await.extend(chunks);
        Ok(())
    }
}
