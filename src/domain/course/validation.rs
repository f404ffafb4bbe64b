//! Validation for course material records

use std::fmt;

/// Maximum length for course titles
pub const MAX_TITLE_LENGTH: usize = 512;

/// Validation errors for course material records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseValidationError {
    /// A required text field is empty or whitespace-only
    EmptyField { field: &'static str },
    /// A title exceeds the maximum length
    TitleTooLong { length: usize, max: usize },
}

impl fmt::Display for CourseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{} cannot be empty", field),
            Self::TitleTooLong { length, max } => {
                write!(f, "title too long: {} characters (max {})", length, max)
            }
        }
    }
}

impl std::error::Error for CourseValidationError {}

/// Validate a required text field is non-empty after trimming
pub fn validate_required_text(
    field: &'static str,
    value: &str,
) -> Result<(), CourseValidationError> {
    if value.trim().is_empty() {
        return Err(CourseValidationError::EmptyField { field });
    }

    Ok(())
}

/// Validate a course or lesson title
pub fn validate_title(field: &'static str, title: &str) -> Result<(), CourseValidationError> {
    validate_required_text(field, title)?;

    if title.len() > MAX_TITLE_LENGTH {
        return Err(CourseValidationError::TitleTooLong {
            length: title.len(),
            max: MAX_TITLE_LENGTH,
        });
    }

    Ok(())
}
