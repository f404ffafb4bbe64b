//! Course material entities: courses, lessons, and content chunks

use serde::{Deserialize, Serialize};

use super::validation::{validate_required_text, validate_title, CourseValidationError};

/// A single lesson within a course
///
/// Created when a course document is parsed; immutable afterward and
/// owned by its [`Course`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Position of the lesson within the course
    pub lesson_number: u32,

    /// Lesson title
    pub title: String,

    /// Optional link to the lesson page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_link: Option<String>,
}

impl Lesson {
    /// Create a new lesson after validating the title
    pub fn new(lesson_number: u32, title: impl Into<String>) -> Result<Self, CourseValidationError> {
        let title = title.into();
        validate_title("lesson title", &title)?;

        Ok(Self {
            lesson_number,
            title,
            lesson_link: None,
        })
    }

    /// Set the lesson link
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.lesson_link = Some(link.into());
        self
    }
}

/// An ingested course
///
/// The title acts as the unique identifier across the vector store.
/// Courses are created during ingestion and read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course title, unique across the store
    pub title: String,

    /// Optional link to the course page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_link: Option<String>,

    /// Optional instructor name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,

    /// Ordered lessons belonging to this course
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Course {
    /// Create a new course after validating the title
    pub fn new(title: impl Into<String>) -> Result<Self, CourseValidationError> {
        let title = title.into();
        validate_title("course title", &title)?;

        Ok(Self {
            title,
            course_link: None,
            instructor: None,
            lessons: Vec::new(),
        })
    }

    /// Set the course link
    pub fn with_course_link(mut self, link: impl Into<String>) -> Self {
        self.course_link = Some(link.into());
        self
    }

    /// Set the instructor
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Append a lesson
    pub fn with_lesson(mut self, lesson: Lesson) -> Self {
        self.lessons.push(lesson);
        self
    }

    /// Look up a lesson by number
    pub fn lesson(&self, lesson_number: u32) -> Option<&Lesson> {
        self.lessons
            .iter()
            .find(|l| l.lesson_number == lesson_number)
    }
}

/// A chunk of course content as indexed by the vector store
///
/// `course_title` is a back-reference to the owning [`Course`] by
/// title, not an owning pointer. `chunk_index` is zero-based and
/// unique within a `(course_title, lesson_number)` group; the
/// document processor is responsible for that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseChunk {
    /// Chunk content text
    pub content: String,

    /// Title of the course this chunk belongs to
    pub course_title: String,

    /// Lesson the chunk was extracted from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_number: Option<u32>,

    /// Zero-based position of the chunk within its source lesson
    pub chunk_index: usize,
}

impl CourseChunk {
    /// Create a new chunk after validating required text fields
    pub fn new(
        content: impl Into<String>,
        course_title: impl Into<String>,
        chunk_index: usize,
    ) -> Result<Self, CourseValidationError> {
        let content = content.into();
        let course_title = course_title.into();

        validate_required_text("content", &content)?;
        validate_required_text("course_title", &course_title)?;

        Ok(Self {
            content,
            course_title,
            lesson_number: None,
            chunk_index,
        })
    }

    /// Set the lesson number
    pub fn with_lesson_number(mut self, lesson_number: u32) -> Self {
        self.lesson_number = Some(lesson_number);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_creation_with_all_fields() {
        let lesson = Lesson::new(1, "Getting Started")
            .unwrap()
            .with_link("https://example.com/lesson1");

        assert_eq!(lesson.lesson_number, 1);
        assert_eq!(lesson.title, "Getting Started");
        assert_eq!(
            lesson.lesson_link.as_deref(),
            Some("https://example.com/lesson1")
        );
    }

    #[test]
    fn test_lesson_creation_without_link() {
        let lesson = Lesson::new(2, "Advanced Topics").unwrap();

        assert_eq!(lesson.lesson_number, 2);
        assert!(lesson.lesson_link.is_none());
    }

    #[test]
    fn test_lesson_requires_title() {
        assert!(Lesson::new(1, "").is_err());
        assert!(Lesson::new(1, "   ").is_err());
    }

    #[test]
    fn test_lesson_requires_number_on_the_wire() {
        let result: Result<Lesson, _> = serde_json::from_value(serde_json::json!({
            "title": "Test"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_course_creation_with_all_fields() {
        let course = Course::new("Python Basics")
            .unwrap()
            .with_course_link("https://example.com/python")
            .with_instructor("John Doe")
            .with_lesson(Lesson::new(1, "Intro").unwrap())
            .with_lesson(Lesson::new(2, "Advanced").unwrap());

        assert_eq!(course.title, "Python Basics");
        assert_eq!(course.instructor.as_deref(), Some("John Doe"));
        assert_eq!(course.lessons.len(), 2);
        assert_eq!(course.lesson(2).unwrap().title, "Advanced");
    }

    #[test]
    fn test_course_creation_with_minimal_fields() {
        let course = Course::new("Python Basics").unwrap();

        assert!(course.course_link.is_none());
        assert!(course.instructor.is_none());
        assert!(course.lessons.is_empty());
    }

    #[test]
    fn test_course_requires_title() {
        assert!(Course::new("").is_err());

        let result: Result<Course, _> = serde_json::from_value(serde_json::json!({
            "course_link": "https://example.com"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_chunk_creation_with_all_fields() {
        let chunk = CourseChunk::new("Python is a programming language.", "Python Basics", 0)
            .unwrap()
            .with_lesson_number(1);

        assert_eq!(chunk.content, "Python is a programming language.");
        assert_eq!(chunk.course_title, "Python Basics");
        assert_eq!(chunk.lesson_number, Some(1));
        assert_eq!(chunk.chunk_index, 0);
    }

    #[test]
    fn test_chunk_creation_without_lesson_number() {
        let chunk = CourseChunk::new("Metadata about the course.", "Python Basics", 0).unwrap();
        assert!(chunk.lesson_number.is_none());
    }

    #[test]
    fn test_chunk_required_fields() {
        assert!(CourseChunk::new("", "Test", 0).is_err());
        assert!(CourseChunk::new("Test", "", 0).is_err());

        // chunk_index missing on the wire
        let result: Result<CourseChunk, _> = serde_json::from_value(serde_json::json!({
            "content": "Test",
            "course_title": "Course"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_chunk_with_long_content() {
        let long_content = "Test content. ".repeat(1000);
        let chunk = CourseChunk::new(long_content.clone(), "Test Course", 0).unwrap();

        assert_eq!(chunk.content, long_content);
        assert!(chunk.content.len() > 10_000);
    }

    #[test]
    fn test_course_round_trip() {
        let course = Course::new("Test Course")
            .unwrap()
            .with_course_link("https://example.com")
            .with_lesson(Lesson::new(1, "Lesson 1").unwrap().with_link("https://example.com/1"))
            .with_lesson(Lesson::new(2, "Lesson 2").unwrap());

        let json = serde_json::to_string(&course).unwrap();
        let parsed: Course = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, course);
    }

    #[test]
    fn test_chunk_round_trip() {
        let chunk = CourseChunk::new("Test content", "Test Course", 3)
            .unwrap()
            .with_lesson_number(1);

        let json = serde_json::to_value(&chunk).unwrap();
        assert_eq!(json["chunk_index"], 3);

        let parsed: CourseChunk = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, chunk);
    }

    #[test]
    fn test_course_with_nested_lessons_from_wire() {
        let course: Course = serde_json::from_value(serde_json::json!({
            "title": "Test Course",
            "lessons": [
                {"lesson_number": 1, "title": "Lesson 1"},
                {"lesson_number": 2, "title": "Lesson 2"}
            ]
        }))
        .unwrap();

        assert_eq!(course.lessons.len(), 2);
        assert_eq!(course.lessons[0].lesson_number, 1);
    }
}
