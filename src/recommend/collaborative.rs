//! Item-item collaborative signal from the user interaction matrix.

use super::ranking::{top_k, ScoredItem};
use super::validation::{ensure_track_axis, validate_k};
use crate::catalog::TrackIds;
use crate::error::{RecommendError, RecommendResult};
use crate::matrix::InteractionMatrix;

/// The `k` interaction matrix columns most similar to `track_id`'s column.
///
/// Fails with `NotFound` when the track is not part of the interaction
/// matrix or when no user ever interacted with it: in both cases there is no
/// collaborative signal for the track.
pub fn recommend_collaborative(
    track_id: &str,
    interaction_matrix: &InteractionMatrix,
    track_ids: &TrackIds,
    k: usize,
) -> RecommendResult<Vec<ScoredItem>> {
    validate_k(k)?;
    ensure_track_axis(track_ids, interaction_matrix)?;

    let column = track_ids.position(track_id).ok_or_else(|| {
        RecommendError::NotFound(format!("track {} in the interaction matrix", track_id))
    })?;

    if !interaction_matrix.has_history(column) {
        return Err(RecommendError::NotFound(format!(
            "interactions for track {}",
            track_id
        )));
    }

    let scores = interaction_matrix.item_similarities(column)?;
    Ok(top_k(scores.into_iter().enumerate(), column, k))
}
