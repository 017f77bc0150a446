mod collaborative;
mod content;
mod format;
mod hybrid;
mod ranking;
#[cfg(test)]
mod test_fixtures;
mod validation;

pub use collaborative::recommend_collaborative;
pub use content::{content_recommendation, recommend_content};
pub use format::{
    format_recommendations, recommendation_page, title_case, RecommendationPage,
    RecommendedTrack,
};
pub use hybrid::{normalize_min_max, Blender, HybridRecommender};
pub use ranking::{Recommendation, ScoredItem};
pub use validation::{diversity_to_weight, MAX_DIVERSITY, MIN_DIVERSITY};
pub(crate) use validation::{ensure_feature_rows, ensure_track_axis};
