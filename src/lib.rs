//! # Greenhouse - a GraphQL API over a plant catalog
//!
//! Greenhouse serves a small plant catalog over GraphQL. The catalog is
//! loaded from a JSON seed file at startup and lives entirely in process
//! memory; mutations are ephemeral and a restart reverts to the seed data.
//!
//! ## Features
//!
//! - **GraphQL API**: two queries and two mutations over the catalog
//! - **GraphiQL**: interactive browser UI on the same `/graphql` endpoint
//! - **CLI**: run the server, execute ad-hoc operations, print the SDL
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server (PORT env var or --port, default 4070)
//! greenhouse serve
//!
//! # List every plant
//! greenhouse query '{ getAllPlants { id name location } }'
//!
//! # Print the schema
//! greenhouse schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server
//! - [`model`]: Data model ([`model::Plant`])
//! - [`store`]: In-memory catalog store

/// Command-line interface definitions using clap.
pub mod cli;

/// Error types and result aliases.
///
/// Defines the `GreenhouseError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and the HTTP server.
///
/// Provides the async-graphql schema plus the axum integration.
pub mod graphql;

/// Data model for plant records.
pub mod model;

/// In-memory catalog store.
///
/// Owns the plant collection and is its sole mutator.
pub mod store;

pub mod logging;
