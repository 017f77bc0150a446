use anyhow::{Context, Result};
use std::time::Duration;

use tracing::info;

use crate::context::ContextStats;
use tower_http::services::ServeDir;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{log_requests, make_recommend_routes, state::*, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub catalog: ContextStats,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug)]
struct LookupQuery {
    pub name: String,
    pub artist: String,
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        catalog: state.context.stats(),
    };
    Json(stats)
}

async fn lookup_song(
    State(context): State<GuardedContext>,
    Query(query): Query<LookupQuery>,
) -> Response {
    let catalog = context.content().catalog();
    match catalog
        .find(&query.name, &query.artist)
        .and_then(|row| catalog.get(row))
    {
        Ok(entry) => Json(entry).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn make_app(config: ServerConfig, context: GuardedContext) -> Router {
    let state = ServerState::new(config.clone(), context);

    let catalog_routes: Router = Router::new()
        .route("/lookup", get(lookup_song))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    home_router
        .nest("/v1/catalog", catalog_routes)
        .nest("/v1/recommend", make_recommend_routes(state.clone()))
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(context: GuardedContext, config: ServerConfig) -> Result<()> {
    let port = config.port;
    let app = make_app(config, context);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Listening on port {}", port);

    Ok(axum::serve(listener, app).await?)
}
