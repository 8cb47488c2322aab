//! Rendering for CLI output.

use std::process::ExitCode;

use phrasal_config::{Config, OutputFormat};
use phrasal_query::{Dialect, Query};
use serde_json::Value;

use crate::cli::args::OutputArgs;

/// Resolved output options: command-line flags over configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// How to print each query.
    pub format: OutputFormat,
    /// Backend dialect for JSON output.
    pub dialect: Dialect,
    /// Field for Elasticsearch leaves.
    pub field: String,
    /// Whether JSON is pretty-printed.
    pub pretty: bool,
}

impl OutputOptions {
    /// Combines flags with configured settings; flags win.
    pub fn resolve(args: &OutputArgs, config: &Config) -> Self {
        let format = if args.json {
            OutputFormat::Json
        } else if args.tree {
            OutputFormat::Tree
        } else {
            config.output.format
        };

        Self {
            format,
            dialect: args.dialect.unwrap_or(config.output.dialect),
            field: args
                .field
                .clone()
                .unwrap_or_else(|| config.backend.field.clone()),
            pretty: config.output.pretty && !args.compact,
        }
    }

    /// Renders a query's backend query as JSON.
    pub fn backend_json(&self, query: &Query) -> Value {
        query
            .to_backend_query()
            .to_json(self.dialect, &self.field)
    }
}

/// Prints parsed queries in the selected format.
///
/// With several queries, JSON output is an array and tree output separates
/// queries with their source text.
pub fn output_queries(queries: &[(String, Query)], options: &OutputOptions) -> ExitCode {
    match options.format {
        OutputFormat::Json => {
            let value = match queries {
                [(_, query)] => options.backend_json(query),
                _ => Value::Array(
                    queries
                        .iter()
                        .map(|(_, query)| options.backend_json(query))
                        .collect(),
                ),
            };
            print_json(&value, options.pretty)
        }
        OutputFormat::Tree => {
            let many = queries.len() > 1;
            for (index, (text, query)) in queries.iter().enumerate() {
                if many {
                    if index > 0 {
                        println!();
                    }
                    println!("# {text}");
                }
                print!("{query}");
            }
            ExitCode::SUCCESS
        }
    }
}

/// Prints a JSON value to stdout.
fn print_json(value: &Value, pretty: bool) -> ExitCode {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match rendered {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}
