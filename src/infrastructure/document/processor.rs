//! Course script parser and chunker
//!
//! Course documents are plain-text scripts with a metadata header
//! followed by lesson sections:
//!
//! ```text
//! Course Title: Introduction to Python
//! Course Link: https://example.com/python
//! Course Instructor: John Doe
//!
//! Lesson 0: Introduction
//! Lesson Link: https://example.com/lesson0
//! <transcript text...>
//! ```

use std::path::Path;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::domain::course::{Course, CourseChunk, Lesson};
use crate::domain::document::{CourseMetadata, DocumentProcessor};
use crate::domain::DomainError;

static LESSON_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^lesson\s+(\d+):\s*(.+)$").unwrap());

/// Document processor for plain-text course scripts
pub struct CourseDocumentProcessor {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl CourseDocumentProcessor {
    /// Create a processor producing chunks of roughly `chunk_size`
    /// characters with `chunk_overlap` characters carried between
    /// consecutive chunks
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, DomainError> {
        if chunk_size == 0 {
            return Err(DomainError::configuration("chunk_size must be positive"));
        }

        if chunk_overlap >= chunk_size {
            return Err(DomainError::configuration(
                "chunk_overlap must be smaller than chunk_size",
            ));
        }

        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    fn header_value<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
        let rest = line.strip_prefix(prefix)?;
        let value = rest.trim();
        (!value.is_empty()).then_some(value)
    }

    /// Split a lesson body into sections, one per lesson header
    fn split_lessons(body: &str) -> (String, Vec<ParsedLesson>) {
        let mut preamble = String::new();
        let mut lessons: Vec<ParsedLesson> = Vec::new();

        for line in body.lines() {
            if let Some(captures) = LESSON_HEADER.captures(line.trim()) {
                let number: u32 = captures[1].parse().unwrap_or(0);
                lessons.push(ParsedLesson {
                    number,
                    title: captures[2].trim().to_string(),
                    link: None,
                    content: String::new(),
                });
                continue;
            }

            match lessons.last_mut() {
                Some(lesson) => {
                    if lesson.content.is_empty() && lesson.link.is_none() {
                        if let Some(link) = Self::header_value(line.trim(), "Lesson Link:") {
                            lesson.link = Some(link.to_string());
                            continue;
                        }
                    }

                    lesson.content.push_str(line);
                    lesson.content.push('\n');
                }
                None => {
                    preamble.push_str(line);
                    preamble.push('\n');
                }
            }
        }

        (preamble, lessons)
    }
}

struct ParsedLesson {
    number: u32,
    title: String,
    link: Option<String>,
    content: String,
}

#[async_trait]
impl DocumentProcessor for CourseDocumentProcessor {
    fn chunk_text(&self, text: &str) -> Vec<String> {
        let sentences: Vec<&str> = text
            .split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut current_len = 0usize;

        for sentence in sentences {
            if current_len > 0 && current_len + sentence.len() > self.chunk_size {
                chunks.push(current.join(" "));

                // Carry trailing sentences into the next chunk
                let mut overlap: Vec<&str> = Vec::new();
                let mut overlap_len = 0usize;
                for s in current.iter().rev() {
                    if overlap_len + s.len() > self.chunk_overlap {
                        break;
                    }
                    overlap_len += s.len();
                    overlap.insert(0, s);
                }

                current = overlap;
                current_len = overlap_len;
            }

            current_len += sentence.len();
            current.push(sentence);
        }

        if !current.is_empty() {
            chunks.push(current.join(" "));
        }

        chunks
    }

    fn extract_metadata(&self, text: &str) -> Result<CourseMetadata, DomainError> {
        let mut title = None;
        let mut course_link = None;
        let mut instructor = None;

        for line in text.lines() {
            let line = line.trim();

            // The header ends at the first lesson section
            if LESSON_HEADER.is_match(line) {
                break;
            }

            if let Some(value) = Self::header_value(line, "Course Title:") {
                title = Some(value.to_string());
            } else if let Some(value) = Self::header_value(line, "Course Link:") {
                course_link = Some(value.to_string());
            } else if let Some(value) = Self::header_value(line, "Course Instructor:") {
                instructor = Some(value.to_string());
            }
        }

        let title =
            title.ok_or_else(|| DomainError::document("missing 'Course Title:' header"))?;

        Ok(CourseMetadata {
            title,
            course_link,
            instructor,
        })
    }

    async fn process_course_document(
        &self,
        path: &Path,
    ) -> Result<(Course, Vec<CourseChunk>), DomainError> {
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::document(format!("failed to read {}: {}", path.display(), e))
        })?;

        let metadata = self.extract_metadata(&text)?;
        let (preamble, parsed_lessons) = Self::split_lessons(&text);

        let mut course = Course::new(&metadata.title)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if let Some(link) = metadata.course_link {
            course = course.with_course_link(link);
        }

        if let Some(instructor) = metadata.instructor {
            course = course.with_instructor(instructor);
        }

        let mut chunks = Vec::new();

        // Course-level text before the first lesson (minus the header
        // lines already captured as metadata)
        let preamble_body: String = preamble
            .lines()
            .filter(|line| {
                let line = line.trim();
                !line.starts_with("Course Title:")
                    && !line.starts_with("Course Link:")
                    && !line.starts_with("Course Instructor:")
            })
            .collect::<Vec<_>>()
            .join("\n");

        for (index, content) in self.chunk_text(&preamble_body).into_iter().enumerate() {
            chunks.push(
                CourseChunk::new(content, &metadata.title, index)
                    .map_err(|e| DomainError::validation(e.to_string()))?,
            );
        }

        for parsed in parsed_lessons {
            let mut lesson = Lesson::new(parsed.number, &parsed.title)
                .map_err(|e| DomainError::validation(e.to_string()))?;

            if let Some(link) = parsed.link {
                lesson = lesson.with_link(link);
            }

            course = course.with_lesson(lesson);

            // chunk_index restarts per lesson, keeping it unique
            // within the (course_title, lesson_number) group
            for (index, content) in self.chunk_text(&parsed.content).into_iter().enumerate() {
                chunks.push(
                    CourseChunk::new(content, &metadata.title, index)
                        .map_err(|e| DomainError::validation(e.to_string()))?
                        .with_lesson_number(parsed.number),
                );
            }
        }

        debug!(
            course = %course.title,
            lessons = course.lessons.len(),
            chunks = chunks.len(),
            "Processed course document"
        );

        Ok((course, chunks))
    }
}
