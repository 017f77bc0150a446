//! Hybrid recommendations: a weighted blend of normalized content and
//! collaborative scores.

use super::collaborative::recommend_collaborative;
use super::content::recommend_content;
use super::ranking::{attach_entries, top_k, Recommendation, ScoredItem};
use super::validation::{
    diversity_to_weight, ensure_feature_rows, ensure_track_axis, validate_k, validate_weight,
};
use crate::catalog::{Catalog, TrackIds};
use crate::error::{RecommendError, RecommendResult};
use crate::matrix::{CsrMatrix, InteractionMatrix};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Min-max normalization of the scores to [0, 1].
///
/// When every score is the same, candidates get 1.0 if that score is
/// positive and 0.0 otherwise.
pub fn normalize_min_max(items: &[ScoredItem]) -> Vec<ScoredItem> {
    let min = items.iter().map(|i| i.score).fold(f64::INFINITY, f64::min);
    let max = items
        .iter()
        .map(|i| i.score)
        .fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    items
        .iter()
        .map(|item| {
            let score = if range > 0.0 {
                (item.score - min) / range
            } else if max > 0.0 {
                1.0
            } else {
                0.0
            };
            ScoredItem {
                index: item.index,
                score,
            }
        })
        .collect()
}

/// Blends content results (keyed by catalog row) with collaborative results
/// (keyed by interaction matrix column).
pub struct Blender<'a> {
    catalog: &'a Catalog,
    track_ids: &'a TrackIds,
}

impl<'a> Blender<'a> {
    pub fn new(catalog: &'a Catalog, track_ids: &'a TrackIds) -> Self {
        Blender { catalog, track_ids }
    }

    /// Catalog row of an interaction matrix column, if the track is in the catalog.
    fn row_of_column(&self, column: usize) -> Option<usize> {
        self.track_ids
            .get(column)
            .and_then(|track_id| self.catalog.find_track(track_id))
    }

    /// Ranks the union of both candidate sets by
    /// `weight_content * content + (1 - weight_content) * collaborative`,
    /// a candidate missing from one set scores 0 for that signal.
    /// Without any collaborative result the ranking is content-only.
    pub fn blend(
        &self,
        content_results: &[ScoredItem],
        collaborative_results: &[ScoredItem],
        weight_content: f64,
        query_row: usize,
        k: usize,
    ) -> RecommendResult<Vec<ScoredItem>> {
        validate_k(k)?;
        validate_weight(weight_content)?;

        let weight_content = if collaborative_results.is_empty() {
            1.0
        } else {
            weight_content
        };

        let mut candidates: BTreeMap<usize, (f64, f64)> = BTreeMap::new();
        for item in normalize_min_max(content_results) {
            candidates.entry(item.index).or_default().0 = item.score;
        }

        let mut unmapped = 0;
        for item in normalize_min_max(collaborative_results) {
            match self.row_of_column(item.index) {
                Some(row) => {
                    let entry = candidates.entry(row).or_default();
                    entry.1 = entry.1.max(item.score);
                }
                None => unmapped += 1,
            }
        }
        if unmapped > 0 {
            debug!(
                "{} collaborative candidates are not in the catalog, skipped",
                unmapped
            );
        }

        let blended = candidates.into_iter().map(|(row, (content, collaborative))| {
            (
                row,
                weight_content * content + (1.0 - weight_content) * collaborative,
            )
        });
        Ok(top_k(blended, query_row, k))
    }
}

/// Hybrid recommender with a fixed number of results and content weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridRecommender {
    number_of_recommendations: usize,
    weight_content_based: f64,
}

impl HybridRecommender {
    pub fn new(
        number_of_recommendations: usize,
        weight_content_based: f64,
    ) -> RecommendResult<Self> {
        validate_k(number_of_recommendations)?;
        validate_weight(weight_content_based)?;
        Ok(HybridRecommender {
            number_of_recommendations,
            weight_content_based,
        })
    }

    /// `diversity` goes from 1 (personalized) to 9 (diverse), the content
    /// weight is `1 - diversity / 10`.
    pub fn with_diversity(number_of_recommendations: usize, diversity: u8) -> RecommendResult<Self> {
        HybridRecommender::new(number_of_recommendations, diversity_to_weight(diversity)?)
    }

    pub fn number_of_recommendations(&self) -> usize {
        self.number_of_recommendations
    }

    pub fn weight_content_based(&self) -> f64 {
        self.weight_content_based
    }

    pub fn recommend<'a>(
        &self,
        song_name: &str,
        artist_name: &str,
        catalog: &'a Catalog,
        feature_matrix: &CsrMatrix,
        track_ids: &TrackIds,
        interaction_matrix: &InteractionMatrix,
    ) -> RecommendResult<Vec<Recommendation<'a>>> {
        ensure_feature_rows(catalog, feature_matrix)?;
        ensure_track_axis(track_ids, interaction_matrix)?;

        let row_index = catalog.find(song_name, artist_name)?;
        let entry = catalog.get(row_index)?;
        debug!(
            "Hybrid recommendations for \"{}\" by \"{}\" (row {}), k={}, weight_content={}",
            song_name,
            artist_name,
            row_index,
            self.number_of_recommendations,
            self.weight_content_based
        );

        let content = recommend_content(row_index, feature_matrix, feature_matrix.nrows())?;

        let items_pool = interaction_matrix.items_count().max(1);
        let collaborative = match recommend_collaborative(
            &entry.track_id,
            interaction_matrix,
            track_ids,
            items_pool,
        ) {
            Ok(results) => results,
            Err(RecommendError::NotFound(reason)) => {
                warn!(
                    "No collaborative signal for \"{}\" by \"{}\" ({}), using content similarity only",
                    song_name, artist_name, reason
                );
                vec![]
            }
            Err(err) => return Err(err),
        };

        let ranked = Blender::new(catalog, track_ids).blend(
            &content,
            &collaborative,
            self.weight_content_based,
            row_index,
            self.number_of_recommendations,
        )?;
        attach_entries(catalog, &ranked)
    }
}
