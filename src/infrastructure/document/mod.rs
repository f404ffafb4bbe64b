//! Document processor implementations

mod processor;

pub use processor::CourseDocumentProcessor;
