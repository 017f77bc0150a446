//! Shared in-memory artifacts for the recommender unit tests.
//!
//! 60 songs, "crawling" at row 10 is closest to "numb" at row 57 in feature
//! space. The interaction matrix columns are in reverse catalog order plus
//! one track unknown to the catalog, and "crawling" has no interaction.

use crate::catalog::{Catalog, SongRecord, TrackIds};
use crate::matrix::{CsrMatrix, InteractionMatrix};

pub(crate) const FIXTURE_ROWS: usize = 60;
pub(crate) const CRAWLING_ROW: usize = 10;
pub(crate) const NUMB_ROW: usize = 57;
pub(crate) const ORPHAN_TRACK: &str = "ORPHAN";
const FEATURES: usize = 24;
const USERS: usize = 8;

pub(crate) struct Fixture {
    pub catalog: Catalog,
    pub features: CsrMatrix,
    pub track_ids: TrackIds,
    pub interactions: InteractionMatrix,
}

pub(crate) fn track_id(row: usize) -> String {
    format!("T{:03}", row)
}

pub(crate) fn column_of(row: usize) -> usize {
    FIXTURE_ROWS - 1 - row
}

fn records() -> Vec<SongRecord> {
    (0..FIXTURE_ROWS)
        .map(|row| {
            let (name, artist) = match row {
                CRAWLING_ROW => ("crawling".to_string(), "linkin park".to_string()),
                NUMB_ROW => ("numb".to_string(), "linkin park".to_string()),
                _ => (format!("song {}", row), format!("artist {}", row % 5)),
            };
            SongRecord {
                track_id: track_id(row),
                name,
                artist,
                preview_reference: format!("https://previews.test/{}.mp3", track_id(row)),
            }
        })
        .collect()
}

fn features() -> CsrMatrix {
    let mut triplets = vec![];
    for row in 0..FIXTURE_ROWS {
        match row {
            CRAWLING_ROW => {
                triplets.push((row, 20, 1.0));
                triplets.push((row, 21, 1.0));
            }
            NUMB_ROW => {
                triplets.push((row, 20, 1.0));
                triplets.push((row, 21, 0.9));
            }
            30 => {
                triplets.push((row, 0, 1.0));
                triplets.push((row, 20, 1.0));
            }
            _ => {
                triplets.push((row, row % 7, 1.0));
                triplets.push((row, 7 + row % 11, (row % 3 + 1) as f64));
            }
        }
    }
    CsrMatrix::from_triplets(FIXTURE_ROWS, FEATURES, &triplets).unwrap()
}

fn interactions() -> InteractionMatrix {
    let orphan_column = FIXTURE_ROWS;
    let mut triplets = vec![(0, orphan_column, 5.0), (1, orphan_column, 5.0)];
    for row in (0..FIXTURE_ROWS).filter(|r| *r != CRAWLING_ROW) {
        triplets.push((row % USERS, column_of(row), 1.0));
        triplets.push(((row * 3 + 1) % USERS, column_of(row), 2.0));
    }
    let matrix = CsrMatrix::from_triplets(USERS, FIXTURE_ROWS + 1, &triplets).unwrap();
    InteractionMatrix::new(matrix)
}

fn track_ids() -> TrackIds {
    let mut ids: Vec<String> = (0..FIXTURE_ROWS).rev().map(track_id).collect();
    ids.push(ORPHAN_TRACK.to_string());
    TrackIds::new(ids).unwrap()
}

pub(crate) fn fixture() -> Fixture {
    Fixture {
        catalog: Catalog::new(records()),
        features: features(),
        track_ids: track_ids(),
        interactions: interactions(),
    }
}
