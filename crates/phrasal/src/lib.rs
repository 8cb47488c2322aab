//! phrasal: search query parsing from the command line.
//!
//! Parses queries written with terms, quoted phrases and `+`/`-` operators,
//! and prints either the clauses grouped by role or the backend query built
//! from them.

#![warn(missing_docs)]

pub mod cli;
