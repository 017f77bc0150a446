//! Song Recommender Library
//!
//! Content-based, collaborative and hybrid song recommendations over a
//! precomputed song catalog, feature matrix and user interaction matrix.

pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod load;
pub mod matrix;
pub mod recommend;
pub mod server;

// Re-export commonly used types for convenience
pub use context::{ContentDataset, HybridDataset, RecommenderContext};
pub use error::{RecommendError, RecommendResult};
pub use load::load_context;
pub use recommend::{content_recommendation, HybridRecommender, RecommendationPage};
pub use server::{run_server, RequestsLoggingLevel};
