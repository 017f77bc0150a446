//! Presentable recommendation records, scores stripped.

use super::ranking::Recommendation;
use crate::catalog::CatalogEntry;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendedTrack {
    /// 0 for the queried song, then 1, 2, ... in ranking order.
    pub position: usize,
    pub track_id: String,
    pub name: String,
    pub artist: String,
    pub preview_reference: String,
}

impl RecommendedTrack {
    fn from_entry(position: usize, entry: &CatalogEntry) -> Self {
        RecommendedTrack {
            position,
            track_id: entry.track_id.clone(),
            name: title_case(&entry.name),
            artist: title_case(&entry.artist),
            preview_reference: entry.preview_reference.clone(),
        }
    }
}

/// The queried song followed by what to play next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationPage {
    pub now_playing: RecommendedTrack,
    pub up_next: Vec<RecommendedTrack>,
}

/// Capitalizes the first letter of every word and lowercases the rest.
/// Apostrophes do not start a new word ("don't" -> "Don't").
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = c.is_alphanumeric() || (in_word && c == '\'');
    }
    out
}

pub fn format_recommendations(recommendations: &[Recommendation]) -> Vec<RecommendedTrack> {
    recommendations
        .iter()
        .enumerate()
        .map(|(i, r)| RecommendedTrack::from_entry(i + 1, r.entry))
        .collect()
}

pub fn recommendation_page(
    query: &CatalogEntry,
    recommendations: &[Recommendation],
) -> RecommendationPage {
    RecommendationPage {
        now_playing: RecommendedTrack::from_entry(0, query),
        up_next: format_recommendations(recommendations),
    }
}
