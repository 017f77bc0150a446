//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all recommender-server endpoints.
//!
//! When API routes or request formats change, update only this file.

#![allow(dead_code)]

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    // ========================================================================
    // Catalog Endpoints
    // ========================================================================

    /// GET /
    pub async fn get_home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Home request failed")
    }

    /// GET /v1/catalog/lookup
    pub async fn lookup(&self, name: &str, artist: &str) -> Response {
        self.client
            .get(format!("{}/v1/catalog/lookup", self.base_url))
            .query(&[("name", name), ("artist", artist)])
            .send()
            .await
            .expect("Lookup request failed")
    }

    // ========================================================================
    // Recommendation Endpoints
    // ========================================================================

    /// POST /v1/recommend/content
    pub async fn recommend_content(
        &self,
        song_name: &str,
        artist_name: &str,
        k: Option<usize>,
    ) -> Response {
        let mut body = json!({
            "song_name": song_name,
            "artist_name": artist_name,
        });
        if let Some(k) = k {
            body["k"] = json!(k);
        }
        self.post_json("/v1/recommend/content", body).await
    }

    /// POST /v1/recommend/hybrid with an explicit content weight
    pub async fn recommend_hybrid_weighted(
        &self,
        song_name: &str,
        artist_name: &str,
        k: usize,
        weight_content_based: f64,
    ) -> Response {
        self.recommend_hybrid(json!({
            "song_name": song_name,
            "artist_name": artist_name,
            "k": k,
            "weight_content_based": weight_content_based,
        }))
        .await
    }

    /// POST /v1/recommend/hybrid with a diversity level
    pub async fn recommend_hybrid_diverse(
        &self,
        song_name: &str,
        artist_name: &str,
        k: usize,
        diversity: u8,
    ) -> Response {
        self.recommend_hybrid(json!({
            "song_name": song_name,
            "artist_name": artist_name,
            "k": k,
            "diversity": diversity,
        }))
        .await
    }

    /// POST /v1/recommend/hybrid with a raw body
    pub async fn recommend_hybrid(&self, body: serde_json::Value) -> Response {
        self.post_json("/v1/recommend/hybrid", body).await
    }

    async fn post_json(&self, path: &str, body: serde_json::Value) -> Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .expect("Recommendation request failed")
    }
}

/// Track ids of the "up next" list of a recommendation page.
pub async fn up_next_ids(response: Response) -> Vec<String> {
    let page: serde_json::Value = response.json().await.expect("Invalid page body");
    page["up_next"]
        .as_array()
        .expect("Missing up_next")
        .iter()
        .map(|t| t["track_id"].as_str().expect("Missing track_id").to_string())
        .collect()
}
