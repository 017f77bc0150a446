//! Content similarity: cosine similarity between song feature vectors.

use super::ranking::{attach_entries, top_k, Recommendation, ScoredItem};
use super::validation::{ensure_feature_rows, validate_k};
use crate::catalog::Catalog;
use crate::error::RecommendResult;
use crate::matrix::CsrMatrix;
use tracing::debug;

/// The `k` rows most similar to `row_index`, the row itself excluded.
pub fn recommend_content(
    row_index: usize,
    feature_matrix: &CsrMatrix,
    k: usize,
) -> RecommendResult<Vec<ScoredItem>> {
    validate_k(k)?;
    let scores = feature_matrix.cosine_against_all(row_index)?;
    Ok(top_k(scores.into_iter().enumerate(), row_index, k))
}

/// Looks up the song in `catalog` and returns the `k` most similar songs.
pub fn content_recommendation<'a>(
    song_name: &str,
    artist_name: &str,
    catalog: &'a Catalog,
    feature_matrix: &CsrMatrix,
    k: usize,
) -> RecommendResult<Vec<Recommendation<'a>>> {
    validate_k(k)?;
    ensure_feature_rows(catalog, feature_matrix)?;

    let row_index = catalog.find(song_name, artist_name)?;
    debug!(
        "Content recommendations for \"{}\" by \"{}\" (row {}), k={}",
        song_name, artist_name, row_index, k
    );

    let ranked = recommend_content(row_index, feature_matrix, k)?;
    attach_entries(catalog, &ranked)
}
