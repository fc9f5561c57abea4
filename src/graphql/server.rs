use std::collections::HashMap;

use async_graphql::Variables;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQL, GraphQLResponse};
use axum::Router;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::Result;

use super::schema::GreenhouseSchema;

/// Serve the schema on `/graphql` until the process is stopped.
///
/// POST requests carry the standard JSON body. GET requests with a `query`
/// parameter are executed too; a plain GET serves the GraphiQL page so the
/// endpoint can be explored from a browser. Cross-origin requests are
/// allowed from anywhere.
pub async fn run_server(schema: GreenhouseSchema, port: u16) -> Result<()> {
    let app = Router::new()
        .route(
            "/graphql",
            get(graphql_get).post_service(GraphQL::new(schema.clone())),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(schema);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "listening on http://localhost:{port}/graphql");
    axum::serve(listener, app).await?;
    Ok(())
}

/// GET handler: execute a query-string request, or fall back to GraphiQL.
async fn graphql_get(
    State(schema): State<GreenhouseSchema>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(query) = params.get("query") else {
        return Html(GraphiQLSource::build().endpoint("/graphql").finish()).into_response();
    };

    let mut request = async_graphql::Request::new(query);
    if let Some(operation_name) = params.get("operationName") {
        request = request.operation_name(operation_name.as_str());
    }
    if let Some(variables) = params.get("variables") {
        match serde_json::from_str::<Variables>(variables) {
            Ok(vars) => request = request.variables(vars),
            Err(err) => {
                return (
                    axum::http::StatusCode::BAD_REQUEST,
                    format!("malformed variables: {err}"),
                )
                    .into_response();
            }
        }
    }

    GraphQLResponse::from(schema.execute(request).await).into_response()
}
