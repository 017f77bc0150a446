//! Artifacts loading functionality
//!
//! An artifacts directory contains:
//! - `songs.json`: array of `{track_id, name, artist, spotify_preview_url}`
//! - `features.json`: transformed song features, one row per song
//! - `hybrid_songs.json`, `hybrid_features.json`: the songs with interaction history
//! - `track_ids.json`: array of track ids, the interaction matrix items in order
//! - `interaction_matrix.json`: users x items engagement
//!
//! Matrices are stored in CSR layout: `{"shape": [rows, cols], "indptr": [...],
//! "indices": [...], "data": [...]}`. The four hybrid files are optional, but
//! must be provided all together.

use crate::catalog::{Catalog, SongRecord, TrackIds};
use crate::context::{ContentDataset, HybridDataset, RecommenderContext};
use crate::error::RecommendResult;
use crate::matrix::{CsrMatrix, InteractionMatrix};
use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

pub const SONGS_FILE: &str = "songs.json";
pub const FEATURES_FILE: &str = "features.json";
pub const HYBRID_SONGS_FILE: &str = "hybrid_songs.json";
pub const HYBRID_FEATURES_FILE: &str = "hybrid_features.json";
pub const TRACK_IDS_FILE: &str = "track_ids.json";
pub const INTERACTION_MATRIX_FILE: &str = "interaction_matrix.json";

const HYBRID_FILES: [&str; 4] = [
    HYBRID_SONGS_FILE,
    HYBRID_FEATURES_FILE,
    TRACK_IDS_FILE,
    INTERACTION_MATRIX_FILE,
];

/// On-disk CSR matrix.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CsrArtifact {
    pub shape: [usize; 2],
    pub indptr: Vec<usize>,
    pub indices: Vec<usize>,
    pub data: Vec<f64>,
}

impl CsrArtifact {
    pub fn into_matrix(self) -> RecommendResult<CsrMatrix> {
        let [nrows, ncols] = self.shape;
        CsrMatrix::new(nrows, ncols, self.data, self.indices, self.indptr)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file_text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read artifact file: {:?}", path))?;
    serde_json::from_str(&file_text)
        .with_context(|| format!("Failed to parse artifact file: {:?}", path))
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let records: Vec<SongRecord> = read_json(path)?;
    Ok(Catalog::new(records))
}

fn load_matrix(path: &Path) -> Result<CsrMatrix> {
    let artifact: CsrArtifact = read_json(path)?;
    artifact
        .into_matrix()
        .with_context(|| format!("Invalid sparse matrix in {:?}", path))
}

fn load_hybrid(dir: &Path) -> Result<HybridDataset> {
    let catalog = load_catalog(&dir.join(HYBRID_SONGS_FILE))?;
    let features = load_matrix(&dir.join(HYBRID_FEATURES_FILE))?;
    let ids: Vec<String> = read_json(&dir.join(TRACK_IDS_FILE))?;
    let track_ids = TrackIds::new(ids)
        .with_context(|| format!("Invalid track ids in {:?}", dir.join(TRACK_IDS_FILE)))?;
    let interactions = InteractionMatrix::new(load_matrix(&dir.join(INTERACTION_MATRIX_FILE))?);

    info!(
        "Hybrid data has:\n{} songs\n{} users\n{} items\n{} interactions",
        catalog.len(),
        interactions.users_count(),
        interactions.items_count(),
        interactions.interactions_count()
    );

    HybridDataset::new(catalog, features, track_ids, interactions)
        .context("Hybrid artifacts are not aligned")
}

pub fn load_context<P: AsRef<Path>>(path: P) -> Result<RecommenderContext> {
    let dir = path.as_ref();
    if !dir.is_dir() {
        bail!("{} is not a valid directory.", dir.display());
    }

    info!("Loading songs from {}...", dir.display());
    let catalog = load_catalog(&dir.join(SONGS_FILE))?;
    let features = load_matrix(&dir.join(FEATURES_FILE))?;
    info!(
        "Catalog has:\n{} songs\n{} artists\n{} features",
        catalog.len(),
        catalog.get_artists_count(),
        features.ncols()
    );
    let content =
        ContentDataset::new(catalog, features).context("Content artifacts are not aligned")?;

    let missing: Vec<&str> = HYBRID_FILES
        .iter()
        .filter(|f| !dir.join(f).is_file())
        .copied()
        .collect();

    match missing.len() {
        0 => {
            let hybrid = load_hybrid(dir)?;
            Ok(RecommenderContext::new(content, hybrid))
        }
        n if n == HYBRID_FILES.len() => {
            warn!("No hybrid artifacts found, hybrid recommendations will use content similarity only.");
            Ok(RecommenderContext::content_only(content)?)
        }
        _ => bail!(
            "Incomplete hybrid artifacts in {}, missing: {}",
            dir.display(),
            missing.join(", ")
        ),
    }
}
