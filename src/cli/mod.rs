//! Command-line interface for greenhouse.
//!
//! Commands: `serve` (HTTP server), `query` (run a GraphQL document against
//! the catalog in-process), `schema` (print the SDL).

mod commands;

pub use commands::{Cli, Commands};
