//! Immutable, validated bundle of the artifacts the recommenders read.
//!
//! Built once at startup and shared read-only (behind an `Arc`) by every
//! request, nothing in here is ever mutated after construction.

use crate::catalog::{Catalog, TrackIds};
use crate::error::RecommendResult;
use crate::matrix::{CsrMatrix, InteractionMatrix};
use crate::recommend::{
    content_recommendation, ensure_feature_rows, ensure_track_axis, recommendation_page,
    HybridRecommender, Recommendation, RecommendationPage,
};
use serde::Serialize;
use tracing::warn;

/// Full catalog with its feature matrix, used for content-only recommendations.
#[derive(Debug)]
pub struct ContentDataset {
    catalog: Catalog,
    features: CsrMatrix,
}

impl ContentDataset {
    pub fn new(catalog: Catalog, features: CsrMatrix) -> RecommendResult<Self> {
        ensure_feature_rows(&catalog, &features)?;
        Ok(ContentDataset { catalog, features })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn features(&self) -> &CsrMatrix {
        &self.features
    }

    pub fn recommend(
        &self,
        song_name: &str,
        artist_name: &str,
        k: usize,
    ) -> RecommendResult<Vec<Recommendation<'_>>> {
        content_recommendation(song_name, artist_name, &self.catalog, &self.features, k)
    }

    pub fn recommendation_page(
        &self,
        song_name: &str,
        artist_name: &str,
        k: usize,
    ) -> RecommendResult<RecommendationPage> {
        let recommendations = self.recommend(song_name, artist_name, k)?;
        let query = self.catalog.get(self.catalog.find(song_name, artist_name)?)?;
        Ok(recommendation_page(query, &recommendations))
    }
}

/// Songs with interaction history, their features and the interaction matrix.
#[derive(Debug)]
pub struct HybridDataset {
    catalog: Catalog,
    features: CsrMatrix,
    track_ids: TrackIds,
    interactions: InteractionMatrix,
}

impl HybridDataset {
    pub fn new(
        catalog: Catalog,
        features: CsrMatrix,
        track_ids: TrackIds,
        interactions: InteractionMatrix,
    ) -> RecommendResult<Self> {
        ensure_feature_rows(&catalog, &features)?;
        ensure_track_axis(&track_ids, &interactions)?;

        let without_column = catalog
            .entries()
            .iter()
            .filter(|e| track_ids.position(&e.track_id).is_none())
            .count();
        if without_column > 0 {
            warn!(
                "{} of {} hybrid catalog songs are not in the interaction matrix, they will get content recommendations only",
                without_column,
                catalog.len()
            );
        }

        Ok(HybridDataset {
            catalog,
            features,
            track_ids,
            interactions,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn features(&self) -> &CsrMatrix {
        &self.features
    }

    pub fn track_ids(&self) -> &TrackIds {
        &self.track_ids
    }

    pub fn interactions(&self) -> &InteractionMatrix {
        &self.interactions
    }

    pub fn recommend(
        &self,
        song_name: &str,
        artist_name: &str,
        recommender: &HybridRecommender,
    ) -> RecommendResult<Vec<Recommendation<'_>>> {
        recommender.recommend(
            song_name,
            artist_name,
            &self.catalog,
            &self.features,
            &self.track_ids,
            &self.interactions,
        )
    }

    pub fn recommendation_page(
        &self,
        song_name: &str,
        artist_name: &str,
        recommender: &HybridRecommender,
    ) -> RecommendResult<RecommendationPage> {
        let recommendations = self.recommend(song_name, artist_name, recommender)?;
        let query = self.catalog.get(self.catalog.find(song_name, artist_name)?)?;
        Ok(recommendation_page(query, &recommendations))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextStats {
    pub songs: usize,
    pub artists: usize,
    pub features: usize,
    pub hybrid_songs: usize,
    pub users: usize,
    pub interactions: usize,
}

#[derive(Debug)]
pub struct RecommenderContext {
    content: ContentDataset,
    hybrid: HybridDataset,
}

impl RecommenderContext {
    pub fn new(content: ContentDataset, hybrid: HybridDataset) -> Self {
        RecommenderContext { content, hybrid }
    }

    /// A context whose hybrid side reuses the content catalog with no
    /// interactions at all, hybrid requests then rank by content only.
    pub fn content_only(content: ContentDataset) -> RecommendResult<Self> {
        let track_ids = TrackIds::new(
            content
                .catalog()
                .entries()
                .iter()
                .map(|e| e.track_id.clone())
                .collect(),
        )?;
        let interactions = InteractionMatrix::empty(track_ids.len());
        let hybrid = HybridDataset::new(
            content.catalog().clone(),
            content.features().clone(),
            track_ids,
            interactions,
        )?;
        Ok(RecommenderContext { content, hybrid })
    }

    pub fn content(&self) -> &ContentDataset {
        &self.content
    }

    pub fn hybrid(&self) -> &HybridDataset {
        &self.hybrid
    }

    pub fn content_recommendation(
        &self,
        song_name: &str,
        artist_name: &str,
        k: usize,
    ) -> RecommendResult<RecommendationPage> {
        self.content.recommendation_page(song_name, artist_name, k)
    }

    pub fn hybrid_recommendation(
        &self,
        song_name: &str,
        artist_name: &str,
        recommender: &HybridRecommender,
    ) -> RecommendResult<RecommendationPage> {
        self.hybrid
            .recommendation_page(song_name, artist_name, recommender)
    }

    pub fn stats(&self) -> ContextStats {
        ContextStats {
            songs: self.content.catalog.len(),
            artists: self.content.catalog.get_artists_count(),
            features: self.content.features.ncols(),
            hybrid_songs: self.hybrid.catalog.len(),
            users: self.hybrid.interactions.users_count(),
            interactions: self.hybrid.interactions.interactions_count(),
        }
    }
}
