use crate::error::{RecommendError, RecommendResult};
use std::collections::HashMap;

/// Track identifiers in interaction matrix item order.
#[derive(Debug, Clone, Default)]
pub struct TrackIds {
    ids: Vec<String>,
    positions: HashMap<String, usize>,
}

impl TrackIds {
    /// Fails if the same id appears twice, since a column could not be
    /// resolved unambiguously.
    pub fn new(ids: Vec<String>) -> RecommendResult<TrackIds> {
        let mut positions = HashMap::with_capacity(ids.len());
        for (column, id) in ids.iter().enumerate() {
            if let Some(previous) = positions.insert(id.clone(), column) {
                return Err(RecommendError::DataAlignment(format!(
                    "track id {} appears at columns {} and {}",
                    id, previous, column
                )));
            }
        }
        Ok(TrackIds { ids, positions })
    }

    pub fn position(&self, track_id: &str) -> Option<usize> {
        self.positions.get(track_id).copied()
    }

    pub fn get(&self, column: usize) -> Option<&str> {
        self.ids.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
