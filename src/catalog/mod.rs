mod catalog;
mod entry;
mod track_ids;

pub use catalog::Catalog;
pub use entry::{CatalogEntry, SongRecord};
pub use track_ids::TrackIds;
