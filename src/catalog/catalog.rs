use super::{CatalogEntry, SongRecord};
use crate::error::{RecommendError, RecommendResult};
use std::collections::HashMap;

fn lookup_key(song_name: &str, artist_name: &str) -> (String, String) {
    (song_name.to_lowercase(), artist_name.to_lowercase())
}

/// Songs metadata table with case-insensitive (name, artist) lookup.
///
/// When several rows share the same (name, artist) pair, or the same track
/// id, lookups resolve to the first one in row order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_name_artist: HashMap<(String, String), usize>,
    by_track_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(records: Vec<SongRecord>) -> Catalog {
        let entries: Vec<CatalogEntry> = records
            .into_iter()
            .enumerate()
            .map(|(row_index, record)| CatalogEntry::from_record(row_index, record))
            .collect();

        let mut by_name_artist = HashMap::with_capacity(entries.len());
        let mut by_track_id = HashMap::with_capacity(entries.len());
        for entry in entries.iter() {
            by_name_artist
                .entry(lookup_key(&entry.name, &entry.artist))
                .or_insert(entry.row_index);
            by_track_id
                .entry(entry.track_id.clone())
                .or_insert(entry.row_index);
        }

        Catalog {
            entries,
            by_name_artist,
            by_track_id,
        }
    }

    /// Row of the song matching both `song_name` and `artist_name`, ignoring case.
    pub fn find(&self, song_name: &str, artist_name: &str) -> RecommendResult<usize> {
        self.by_name_artist
            .get(&lookup_key(song_name, artist_name))
            .copied()
            .ok_or_else(|| RecommendError::song_not_found(song_name, artist_name))
    }

    pub fn contains(&self, song_name: &str, artist_name: &str) -> bool {
        self.find(song_name, artist_name).is_ok()
    }

    pub fn find_track(&self, track_id: &str) -> Option<usize> {
        self.by_track_id.get(track_id).copied()
    }

    pub fn get(&self, row_index: usize) -> RecommendResult<&CatalogEntry> {
        self.entries.get(row_index).ok_or_else(|| {
            RecommendError::NotFound(format!(
                "catalog row {} (catalog has {} rows)",
                row_index,
                self.entries.len()
            ))
        })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_artists_count(&self) -> usize {
        let mut artists: Vec<String> = self
            .entries
            .iter()
            .map(|e| e.artist.to_lowercase())
            .collect();
        artists.sort();
        artists.dedup();
        artists.len()
    }
}
