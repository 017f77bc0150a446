use crate::catalog::{Catalog, CatalogEntry};
use crate::error::RecommendResult;
use serde::Serialize;
use std::cmp::Ordering;

/// A row (or interaction matrix column) with its similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredItem {
    pub index: usize,
    pub score: f64,
}

/// A catalog entry with the score that ranked it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub entry: &'a CatalogEntry,
    pub score: f64,
}

/// Sorts by descending score, ties keep ascending index order, drops
/// `exclude` and keeps at most `k` items.
pub fn top_k<I>(scores: I, exclude: usize, k: usize) -> Vec<ScoredItem>
where
    I: IntoIterator<Item = (usize, f64)>,
{
    let mut ranked: Vec<ScoredItem> = scores
        .into_iter()
        .filter(|(index, _)| *index != exclude)
        .map(|(index, score)| ScoredItem { index, score })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    ranked.truncate(k);
    ranked
}

pub fn attach_entries<'a>(
    catalog: &'a Catalog,
    ranked: &[ScoredItem],
) -> RecommendResult<Vec<Recommendation<'a>>> {
    ranked
        .iter()
        .map(|item| {
            Ok(Recommendation {
                entry: catalog.get(item.index)?,
                score: item.score,
            })
        })
        .collect()
}
