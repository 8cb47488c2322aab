//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod init;
pub mod parse;

use std::process::ExitCode;

use phrasal_query::{Query, QueryError};

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Parse(cmd) => parse::run(ctx, &cmd),
        Commands::Check(cmd) => check::run(&cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}

/// Parses every query, printing a diagnostic for each one that fails.
///
/// Returns the successfully parsed queries paired with their source text, or
/// `Err` if any query failed.
fn parse_all(queries: &[String]) -> Result<Vec<(String, Query)>, Vec<QueryError>> {
    let mut parsed = Vec::with_capacity(queries.len());
    let mut errors = Vec::new();

    for text in queries {
        match phrasal_query::parse(text) {
            Ok(query) => parsed.push((text.clone(), query)),
            Err(e) => {
                eprintln!("{e}");
                errors.push(e);
            }
        }
    }

    if errors.is_empty() {
        Ok(parsed)
    } else {
        Err(errors)
    }
}
