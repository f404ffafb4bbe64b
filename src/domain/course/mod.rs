//! Course material records and their validation

mod entity;
mod validation;

pub use entity::{Course, CourseChunk, Lesson};
pub use validation::{
    validate_required_text, validate_title, CourseValidationError, MAX_TITLE_LENGTH,
};
