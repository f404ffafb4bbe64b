//! Domain layer: entities, validation, and collaborator ports

pub mod course;
pub mod document;
pub mod error;
pub mod generation;
pub mod search;
pub mod session;

pub use course::{Course, CourseChunk, CourseValidationError, Lesson};
pub use document::{CourseMetadata, DocumentProcessor};
pub use error::DomainError;
pub use generation::AnswerGenerator;
pub use search::{SearchHit, SourceReference, VectorStore};
pub use session::{Exchange, SessionId, SessionStore};
