use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "greenhouse")]
#[command(
    author,
    version,
    about = "A GraphQL API server for browsing and curating a plant catalog"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured logs to this file in addition to stderr
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = 4070)]
        port: u16,

        /// Path to the plant catalog seed file
        #[arg(long, env = "GREENHOUSE_DATA", default_value = "plants.json")]
        data: String,
    },

    /// Execute a GraphQL query or mutation and print the JSON response
    Query {
        /// GraphQL document to execute
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Path to the plant catalog seed file
        #[arg(long, env = "GREENHOUSE_DATA", default_value = "plants.json")]
        data: String,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}
