//! Clap argument definitions for the `phrasal` CLI.

use clap::{ArgAction, Args, Parser, Subcommand};
use phrasal_query::Dialect;

/// Parse a backend dialect from a string.
fn parse_dialect(s: &str) -> Result<Dialect, String> {
    s.parse()
}

/// Parse a backend field name, rejecting blank names.
fn parse_field(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("field name must not be empty".to_string());
    }
    Ok(s.to_string())
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "phrasal")]
#[command(about = "Parse search queries into grouped backend queries")]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace); RUST_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output the backend query as JSON
    #[arg(long, conflicts_with = "tree")]
    pub json: bool,

    /// Output the grouped clause tree
    #[arg(long)]
    pub tree: bool,

    /// Role names for JSON output: neutral or elasticsearch [default: neutral]
    #[arg(short = 'd', long, value_parser = parse_dialect)]
    pub dialect: Option<Dialect>,

    /// Field that Elasticsearch leaves match against [default: content]
    #[arg(long, value_parser = parse_field)]
    pub field: Option<String>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `phrasal parse`.
#[derive(Args, Debug, Clone)]
pub struct ParseCommand {
    /// Queries to parse
    #[arg(required = true)]
    pub queries: Vec<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `phrasal check`.
#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    /// Queries to validate
    #[arg(required = true)]
    pub queries: Vec<String>,
}

/// Arguments for `phrasal init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.phrasal.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `phrasal` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse queries and print their clauses or backend query
    #[command(after_help = "\
QUERY SYNTAX:
  term              Optional term
  \"a phrase\"        Optional exact phrase
  +term             Term must appear
  -term             Term must NOT appear
  +\"a phrase\"       Phrase must appear
  -\"a phrase\"       Phrase must NOT appear

EXAMPLES:
  phrasal parse 'hello world'
  phrasal parse --json '+urgent \"quarterly report\" -draft'
  phrasal parse --json --dialect elasticsearch --field body 'rust -deprecated'")]
    Parse(ParseCommand),

    /// Validate queries and print their normalized form
    Check(CheckCommand),

    /// Initialize phrasal configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}
