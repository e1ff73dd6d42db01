//! Analyze command implementation.

use super::read_text;
use crate::backend::{CompletionBackend, EmbeddingBackend};
use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use redliner_analyzer::Analyzer;
use tracing::debug;

/// Execute the analyze command.
pub async fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut analyzer_config = config.analyzer.clone();
    if let Some(top_k) = args.top_k {
        analyzer_config.top_k = top_k;
    }
    if let Some(max_tokens) = args.max_tokens {
        analyzer_config.max_tokens = max_tokens;
    }

    let playbook = read_text(&args.playbook)?;
    let document = read_text(&args.document)?;
    debug!(
        "Loaded playbook ({} chars) and document ({} chars)",
        playbook.len(),
        document.len()
    );

    let embedder =
        EmbeddingBackend::from_config(&config.embedding, analyzer_config.embedding_timeout())?;
    let provider =
        CompletionBackend::from_config(&config.completion, analyzer_config.completion_timeout())?;
    let analyzer = Analyzer::new(embedder, provider, analyzer_config)?;

    let report = analyzer.analyze_detailed(&playbook, &document).await?;

    println!("{}", formatter.format_report(&report)?);
    if report.result.is_empty() {
        eprintln!(
            "{}",
            formatter.warning("The model reply contained no recognisable sections")
        );
    }

    Ok(())
}
