//! Chunk command implementation.

use super::read_text;
use crate::cli::ChunkArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use redliner_analyzer::SentenceChunker;

/// Execute the chunk command.
pub fn execute_chunk(args: ChunkArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let max_tokens = args.max_tokens.unwrap_or(config.analyzer.max_tokens);
    if max_tokens == 0 {
        return Err(CliError::InvalidInput(
            "max-tokens must be greater than 0".to_string(),
        ));
    }

    let playbook = read_text(&args.playbook)?;
    let chunks = SentenceChunker::with_max_tokens(max_tokens).split(&playbook)?;

    println!("{}", formatter.format_chunks(&chunks)?);
    Ok(())
}
