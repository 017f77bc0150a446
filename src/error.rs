//! Errors produced by the recommendation engine.

use thiserror::Error;

/// Errors that can occur while computing recommendations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// A song/artist pair, catalog row or track id is not present.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected request parameters (`k`, weights, diversity).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The loaded artifacts disagree with each other or are malformed.
    #[error("Data alignment error: {0}")]
    DataAlignment(String),
}

impl RecommendError {
    pub fn song_not_found(song_name: &str, artist_name: &str) -> Self {
        RecommendError::NotFound(format!("\"{}\" by \"{}\"", song_name, artist_name))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RecommendError::NotFound(_))
    }
}

pub type RecommendResult<T> = std::result::Result<T, RecommendError>;
