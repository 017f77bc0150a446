use serde::{Deserialize, Serialize};

/// A song row as stored in the artifacts.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct SongRecord {
    pub track_id: String,
    pub name: String,
    pub artist: String,
    #[serde(alias = "spotify_preview_url", default)]
    pub preview_reference: String,
}

/// An immutable catalog row. `row_index` is its position in the catalog and
/// in every matrix aligned with it.
#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub row_index: usize,
    pub track_id: String,
    pub name: String,
    pub artist: String,
    pub preview_reference: String,
}

impl CatalogEntry {
    pub fn from_record(row_index: usize, record: SongRecord) -> Self {
        CatalogEntry {
            row_index,
            track_id: record.track_id,
            name: record.name,
            artist: record.artist,
            preview_reference: record.preview_reference,
        }
    }
}
