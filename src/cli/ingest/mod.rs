//! Ingest command - one-shot indexing of a course document folder

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;

#[derive(Args)]
pub struct IngestArgs {
    /// Folder of course documents to index
    #[arg(default_value = "docs")]
    pub path: PathBuf,
}

/// Index every course document under the given folder and print totals
pub async fn run(args: IngestArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    init_logging(&config.logging);

    let rag_service = crate::build_rag_service(&config)?;
    let (courses, chunks) = rag_service.add_course_folder(&args.path).await?;

    info!(courses, chunks, "Ingestion complete");
    println!("Indexed {} courses ({} chunks)", courses, chunks);

    Ok(())
}
