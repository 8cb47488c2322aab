//! Implementation of `phrasal parse`.

use std::process::ExitCode;

use log::debug;

use super::parse_all;
use crate::cli::{
    args::ParseCommand,
    context::CommandContext,
    output::{OutputOptions, output_queries},
};

/// Parses queries and prints their clause tree or backend query.
pub fn run(ctx: &CommandContext, cmd: &ParseCommand) -> ExitCode {
    let options = OutputOptions::resolve(&cmd.output, &ctx.config);
    debug!("output options: {options:?}");

    match parse_all(&cmd.queries) {
        Ok(queries) => output_queries(&queries, &options),
        Err(_) => ExitCode::FAILURE,
    }
}
