//! Implementation of `phrasal check`.

use std::process::ExitCode;

use crate::cli::args::CheckCommand;

/// Validates queries, printing the normalized form of each valid one.
///
/// Every query is reported, so valid queries still get their `ok:` line when
/// others fail.
pub fn run(cmd: &CheckCommand) -> ExitCode {
    let mut failed = 0;

    for text in &cmd.queries {
        match phrasal_query::parse(text) {
            Ok(query) => println!("ok: {}", query.to_query_string()),
            Err(e) => {
                eprintln!("{e}");
                failed += 1;
            }
        }
    }

    if failed == 0 {
        return ExitCode::SUCCESS;
    }

    eprintln!(
        "{failed} of {} queries failed to parse",
        cmd.queries.len()
    );
    ExitCode::FAILURE
}
