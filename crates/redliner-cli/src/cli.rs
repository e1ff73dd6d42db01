//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Redliner CLI - Review documents against a policy playbook.
#[derive(Debug, Parser)]
#[command(name = "redliner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (default: ~/.redliner/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Review a document against a playbook
    Analyze(AnalyzeArgs),

    /// Show how a playbook is split into chunks
    Chunk(ChunkArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Playbook text file
    #[arg(short, long)]
    pub playbook: PathBuf,

    /// Document text file to review
    #[arg(short, long)]
    pub document: PathBuf,

    /// Number of playbook chunks supplied as context
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Maximum tokens per playbook chunk
    #[arg(short, long)]
    pub max_tokens: Option<usize>,
}

/// Arguments for the chunk command.
#[derive(Debug, Parser)]
pub struct ChunkArgs {
    /// Playbook text file
    #[arg(short, long)]
    pub playbook: PathBuf,

    /// Maximum tokens per chunk
    #[arg(short, long)]
    pub max_tokens: Option<usize>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_command() {
        let cli = Cli::parse_from([
            "redliner",
            "analyze",
            "--playbook",
            "playbook.txt",
            "--document",
            "contract.txt",
            "-k",
            "3",
        ]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.playbook, PathBuf::from("playbook.txt"));
                assert_eq!(args.document, PathBuf::from("contract.txt"));
                assert_eq!(args.top_k, Some(3));
                assert_eq!(args.max_tokens, None);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "redliner", "chunk", "-p", "playbook.txt", "--format", "json", "--no-color", "-vv",
        ]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Chunk(_)));
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["redliner", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected config init"),
        }
    }

    #[test]
    fn test_missing_document_rejected() {
        let result = Cli::try_parse_from(["redliner", "analyze", "--playbook", "p.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Json.into();
        assert_eq!(format, crate::config::OutputFormat::Json);
    }
}
