//! Recommendation API routes

use crate::config::RecommendationSettings;
use crate::error::{RecommendError, RecommendResult};
use crate::recommend::{HybridRecommender, RecommendationPage};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::state::{GuardedContext, ServerState};
use super::ServerConfig;

#[derive(Deserialize, Debug)]
struct ContentRecommendationBody {
    pub song_name: String,
    pub artist_name: String,

    /// Number of recommendations (default from config)
    pub k: Option<usize>,
}

#[derive(Deserialize, Debug)]
struct HybridRecommendationBody {
    pub song_name: String,
    pub artist_name: String,
    pub k: Option<usize>,

    /// Content weight in [0, 1], exclusive with `diversity`.
    pub weight_content_based: Option<f64>,

    /// 1 (personalized) to 9 (diverse), exclusive with `weight_content_based`.
    pub diversity: Option<u8>,
}

#[derive(Serialize, Debug)]
struct ErrorBody {
    pub error: String,
}

fn error_body(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

fn song_not_found_message(song_name: &str) -> String {
    format!(
        "Sorry, we couldn't find {} in our database. Please try another song.",
        song_name
    )
}

fn recommend_error_response(err: RecommendError, song_name: &str) -> Response {
    match err {
        RecommendError::NotFound(reason) => {
            debug!("Recommendation lookup failed: {}", reason);
            error_body(StatusCode::NOT_FOUND, song_not_found_message(song_name))
        }
        RecommendError::InvalidConfiguration(_) => {
            error_body(StatusCode::BAD_REQUEST, err.to_string())
        }
        RecommendError::DataAlignment(_) => {
            error!("Recommendation failed: {}", err);
            error_body(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

fn resolve_k(requested: Option<usize>, settings: &RecommendationSettings) -> Result<usize, Response> {
    let k = requested.unwrap_or(settings.default_k);
    if k > settings.max_k {
        return Err(error_body(
            StatusCode::BAD_REQUEST,
            format!("k must not exceed {}, got {}", settings.max_k, k),
        ));
    }
    Ok(k)
}

fn make_hybrid_recommender(
    body: &HybridRecommendationBody,
    k: usize,
    settings: &RecommendationSettings,
) -> Result<HybridRecommender, RecommendError> {
    match (body.weight_content_based, body.diversity) {
        (Some(_), Some(_)) => Err(RecommendError::InvalidConfiguration(
            "specify either weight_content_based or diversity, not both".to_string(),
        )),
        (Some(weight), None) => HybridRecommender::new(k, weight),
        (None, Some(diversity)) => HybridRecommender::with_diversity(k, diversity),
        (None, None) => HybridRecommender::with_diversity(k, settings.default_diversity),
    }
}

/// Scoring scans the whole catalog, so it runs on the blocking pool.
async fn run_recommendation<F>(song_name: &str, job: F) -> Response
where
    F: FnOnce() -> RecommendResult<RecommendationPage> + Send + 'static,
{
    match tokio::task::spawn_blocking(job).await {
        Ok(Ok(page)) => Json(page).into_response(),
        Ok(Err(err)) => recommend_error_response(err, song_name),
        Err(err) => {
            error!("Recommendation task failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn post_content_recommendation(
    State(context): State<GuardedContext>,
    State(config): State<ServerConfig>,
    Json(body): Json<ContentRecommendationBody>,
) -> Response {
    let k = match resolve_k(body.k, &config.recommendations) {
        Ok(k) => k,
        Err(response) => return response,
    };

    let song_name = body.song_name.clone();
    run_recommendation(&song_name, move || {
        context.content_recommendation(&body.song_name, &body.artist_name, k)
    })
    .await
}

async fn post_hybrid_recommendation(
    State(context): State<GuardedContext>,
    State(config): State<ServerConfig>,
    Json(body): Json<HybridRecommendationBody>,
) -> Response {
    let k = match resolve_k(body.k, &config.recommendations) {
        Ok(k) => k,
        Err(response) => return response,
    };

    let recommender = match make_hybrid_recommender(&body, k, &config.recommendations) {
        Ok(recommender) => recommender,
        Err(err) => return recommend_error_response(err, &body.song_name),
    };

    let song_name = body.song_name.clone();
    run_recommendation(&song_name, move || {
        context.hybrid_recommendation(&body.song_name, &body.artist_name, &recommender)
    })
    .await
}

pub fn make_recommend_routes(state: ServerState) -> Router {
    Router::new()
        .route("/content", post(post_content_recommendation))
        .route("/hybrid", post(post_hybrid_recommendation))
        .with_state(state)
}
