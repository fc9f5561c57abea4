//! GraphQL schema, resolvers, and HTTP server for the plant catalog.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! greenhouse serve --port 4070
//!
//! # Execute a query from the CLI
//! greenhouse query '{ getPlantsByName(name: "fern") { id name } }'
//!
//! # Execute a mutation from the CLI
//! greenhouse query 'mutation { deletePlantDetails(id: "1") { name } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `getAllPlants`, `getPlantsByName`
//! - **Mutations**: `updatePlantDetails`, `deletePlantDetails`
//!
//! The operation names and argument shapes are an external contract shared
//! with existing clients; they are camelCase on the wire and must not drift.

mod schema;
mod server;
mod types;

pub use schema::{GreenhouseSchema, MutationRoot, QueryRoot, build_schema};
pub use server::run_server;
pub use types::Plant;
