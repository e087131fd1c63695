//! docmatch CLI entrypoint.
//!
//! `docmatch <document-id>` loads the documents directory, ranks every other document of the
//! same owner against the given one and prints the report as JSON.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use mimalloc::MiMalloc;

use docmatch::config::Config;
use docmatch::embedding::EmbeddingRuntime;
use docmatch::scoring::MatchScorer;
use docmatch::semantic::SemanticEstimator;
use docmatch::service::{MatchError, MatchService};
use docmatch::store::{DocumentId, HistorySink, JsonlHistoryLog, MemoryDocumentStore, MemoryHistoryLog};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "usage: docmatch <document-id> | docmatch --health-check";

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--health-check") {
        return Ok(run_health_check());
    }

    let raw_id = args.first().context(USAGE)?;
    let source_id: u64 = raw_id
        .parse()
        .with_context(|| format!("invalid document id '{}'\n{}", raw_id, USAGE))?;

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        documents_path = %config.documents_path.display(),
        semantic_tier = %config.semantic_tier,
        model_configured = config.model_path.is_some(),
        "docmatch starting"
    );

    let documents = Arc::new(MemoryDocumentStore::load_dir(
        &config.documents_path,
        &config.owner,
    )?);

    let history: Arc<dyn HistorySink> = match &config.history_path {
        Some(path) => Arc::new(JsonlHistoryLog::new(path.clone())),
        None => Arc::new(MemoryHistoryLog::new()),
    };

    let runtime = Arc::new(match config.embedding_config() {
        Some(embedding_config) => EmbeddingRuntime::from_config(embedding_config),
        None => EmbeddingRuntime::unavailable(),
    });
    let semantic = SemanticEstimator::from_config(&config, runtime);
    let service = MatchService::new(documents, history, MatchScorer::new(semantic));

    match service.compute_matches(DocumentId(source_id)) {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ MatchError::DocumentNotFound { .. }) => {
            println!("{}", serde_json::to_string_pretty(&e.to_body())?);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn run_health_check() -> ExitCode {
    match Config::from_env().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => {
            tracing::info!(
                semantic_tier = %config.semantic_tier,
                model_configured = config.model_path.is_some(),
                "Health check passed"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            ExitCode::FAILURE
        }
    }
}
