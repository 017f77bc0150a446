//! Eager checks on request parameters and on artifact alignment.

use crate::catalog::{Catalog, TrackIds};
use crate::error::{RecommendError, RecommendResult};
use crate::matrix::{CsrMatrix, InteractionMatrix};

pub const MIN_DIVERSITY: u8 = 1;
pub const MAX_DIVERSITY: u8 = 9;

pub fn validate_k(k: usize) -> RecommendResult<()> {
    if k == 0 {
        return Err(RecommendError::InvalidConfiguration(
            "the number of recommendations must be positive".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_weight(weight_content_based: f64) -> RecommendResult<()> {
    if !weight_content_based.is_finite() || !(0.0..=1.0).contains(&weight_content_based) {
        return Err(RecommendError::InvalidConfiguration(format!(
            "weight_content_based must be within [0, 1], got {}",
            weight_content_based
        )));
    }
    Ok(())
}

/// Converts a diversity level (1 = most personalized, 9 = most diverse) into
/// the content-based weight.
pub fn diversity_to_weight(diversity: u8) -> RecommendResult<f64> {
    if !(MIN_DIVERSITY..=MAX_DIVERSITY).contains(&diversity) {
        return Err(RecommendError::InvalidConfiguration(format!(
            "diversity must be within [{}, {}], got {}",
            MIN_DIVERSITY, MAX_DIVERSITY, diversity
        )));
    }
    Ok(1.0 - diversity as f64 / 10.0)
}

pub fn ensure_feature_rows(catalog: &Catalog, features: &CsrMatrix) -> RecommendResult<()> {
    if catalog.len() != features.nrows() {
        return Err(RecommendError::DataAlignment(format!(
            "catalog has {} rows but the feature matrix has {}",
            catalog.len(),
            features.nrows()
        )));
    }
    Ok(())
}

pub fn ensure_track_axis(
    track_ids: &TrackIds,
    interactions: &InteractionMatrix,
) -> RecommendResult<()> {
    if track_ids.len() != interactions.items_count() {
        return Err(RecommendError::DataAlignment(format!(
            "{} track ids but the interaction matrix has {} items",
            track_ids.len(),
            interactions.items_count()
        )));
    }
    Ok(())
}
