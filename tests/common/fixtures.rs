//! Test fixture creation for recommender artifacts
//!
//! The full catalog has 6 songs over 3 features. Five of them were played by
//! someone and form the hybrid catalog, "crawling" was never played.

use super::constants::*;
use anyhow::Result;
use serde_json::json;
use song_recommender::load::{
    CsrArtifact, FEATURES_FILE, HYBRID_FEATURES_FILE, HYBRID_SONGS_FILE, INTERACTION_MATRIX_FILE,
    SONGS_FILE, TRACK_IDS_FILE,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct FixtureSong {
    track_id: &'static str,
    name: &'static str,
    artist: &'static str,
    features: [f64; 3],
}

const SONGS: [FixtureSong; CATALOG_SONGS] = [
    FixtureSong {
        track_id: CRAWLING_ID,
        name: CRAWLING_NAME,
        artist: LINKIN_PARK,
        features: [1.0, 0.9, 0.0],
    },
    FixtureSong {
        track_id: NUMB_ID,
        name: NUMB_NAME,
        artist: LINKIN_PARK,
        features: [1.0, 1.0, 0.0],
    },
    FixtureSong {
        track_id: IN_THE_END_ID,
        name: IN_THE_END_NAME,
        artist: LINKIN_PARK,
        features: [0.9, 0.6, 0.1],
    },
    FixtureSong {
        track_id: HALO_ID,
        name: HALO_NAME,
        artist: BEYONCE,
        features: [0.0, 0.2, 1.0],
    },
    FixtureSong {
        track_id: CRAZY_IN_LOVE_ID,
        name: CRAZY_IN_LOVE_NAME,
        artist: BEYONCE,
        features: [0.1, 0.0, 1.0],
    },
    FixtureSong {
        track_id: YELLOW_ID,
        name: YELLOW_NAME,
        artist: COLDPLAY,
        features: [0.5, 0.5, 0.5],
    },
];

fn write_json(dir: &Path, file: &str, value: &impl serde::Serialize) -> Result<()> {
    fs::write(dir.join(file), serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn songs_json(songs: &[&FixtureSong]) -> serde_json::Value {
    songs
        .iter()
        .map(|s| {
            json!({
                "track_id": s.track_id,
                "name": s.name,
                "artist": s.artist,
                "spotify_preview_url": format!("https://previews.test/{}.mp3", s.track_id),
            })
        })
        .collect()
}

fn features_artifact(songs: &[&FixtureSong]) -> CsrArtifact {
    let mut indptr = vec![0];
    let mut indices = vec![];
    let mut data = vec![];
    for song in songs {
        for (col, value) in song.features.iter().enumerate() {
            if *value != 0.0 {
                indices.push(col);
                data.push(*value);
            }
        }
        indptr.push(indices.len());
    }
    CsrArtifact {
        shape: [songs.len(), 3],
        indptr,
        indices,
        data,
    }
}

/// Users x items plays, items ordered as in `track_ids.json`:
/// yellow, crazy in love, halo, in the end, numb.
fn interaction_artifact() -> CsrArtifact {
    CsrArtifact {
        shape: [INTERACTION_USERS, HYBRID_SONGS],
        // user 0: halo, numb
        // user 1: crazy in love, halo, numb
        // user 2: yellow, in the end
        // user 3: nothing
        indptr: vec![0, 2, 5, 7, 7],
        indices: vec![2, 4, 1, 2, 4, 0, 3],
        data: vec![3.0, 5.0, 1.0, 4.0, 2.0, 1.0, 4.0],
    }
}

fn write_content(dir: &Path) -> Result<()> {
    let all: Vec<&FixtureSong> = SONGS.iter().collect();
    write_json(dir, SONGS_FILE, &songs_json(&all))?;
    write_json(dir, FEATURES_FILE, &features_artifact(&all))?;
    Ok(())
}

/// Creates an artifacts directory with the full catalog only.
pub fn create_content_artifacts() -> Result<TempDir> {
    let dir = TempDir::new()?;
    write_content(dir.path())?;
    Ok(dir)
}

/// Creates an artifacts directory with both the full and the hybrid data.
pub fn create_full_artifacts() -> Result<TempDir> {
    let dir = TempDir::new()?;
    write_content(dir.path())?;

    let played: Vec<&FixtureSong> = SONGS.iter().filter(|s| s.track_id != CRAWLING_ID).collect();
    write_json(dir.path(), HYBRID_SONGS_FILE, &songs_json(&played))?;
    write_json(dir.path(), HYBRID_FEATURES_FILE, &features_artifact(&played))?;
    write_json(
        dir.path(),
        TRACK_IDS_FILE,
        &json!([YELLOW_ID, CRAZY_IN_LOVE_ID, HALO_ID, IN_THE_END_ID, NUMB_ID]),
    )?;
    write_json(dir.path(), INTERACTION_MATRIX_FILE, &interaction_artifact())?;

    Ok(dir)
}
