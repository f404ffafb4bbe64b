//! Infrastructure layer: port implementations and services

pub mod document;
pub mod generation;
pub mod logging;
pub mod services;
pub mod session;
pub mod vector_store;
