//! CLI module for the course materials RAG API
//!
//! Provides subcommands for the two ways the system is used:
//! - `serve`: run the HTTP API (default)
//! - `ingest`: index a folder of course documents and exit

pub mod ingest;
pub mod serve;

use clap::{Parser, Subcommand};

/// Course Materials RAG API - question answering over indexed course documents
#[derive(Parser)]
#[command(name = "course-rag-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve,

    /// Index a folder of course documents and print the totals
    Ingest(ingest::IngestArgs),
}
