use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use greenhouse::cli::{Cli, Commands};
use greenhouse::graphql::{build_schema, run_server};
use greenhouse::store::PlantStore;

fn main() -> Result<()> {
    let cli = Cli::parse();
    greenhouse::logging::init(cli.verbose, cli.log_file.map(PathBuf::from));

    match cli.command {
        Commands::Serve { port, data } => {
            let store = load_store(&data)?;
            let schema = build_schema(store);

            println!(
                "{} GraphQL server on http://localhost:{}/graphql",
                "Starting".green(),
                port
            );
            println!("GraphiQL: http://localhost:{}/graphql", port);

            tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, port).await })?;
            Ok(())
        }
        Commands::Query {
            query,
            variables,
            data,
        } => {
            let store = load_store(&data)?;
            let schema = build_schema(store);

            let vars: async_graphql::Variables = if let Some(v) = variables {
                serde_json::from_str(&v).context("Failed to parse variables as JSON")?
            } else {
                async_graphql::Variables::default()
            };

            let request = async_graphql::Request::new(&query).variables(vars);
            let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Commands::Schema => {
            let schema = build_schema(Arc::new(PlantStore::new(Vec::new())));
            println!("{}", schema.sdl());
            Ok(())
        }
    }
}

fn load_store(data: &str) -> Result<Arc<PlantStore>> {
    let store = PlantStore::load(Path::new(data))
        .with_context(|| format!("Failed to load plant catalog from {}", data))?;
    if store.is_empty() {
        tracing::warn!("plant catalog is empty");
    }
    Ok(Arc::new(store))
}
