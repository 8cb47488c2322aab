//! Command-line interface for the `phrasal` query parser.

use std::process::ExitCode;

use clap::Parser;
use phrasal::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands, logging,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = match &cli.command {
        Commands::Init(_) | Commands::Check(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };

    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
