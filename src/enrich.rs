//! Best-effort enrichment of scraped tracks with cover art, preview clips and album
//! names from the iTunes Search API.
//!
//! Lookups are independent: one request per track, all of a batch in flight at once,
//! and a failed lookup only means that track stays as scraped.

mod itunes;

pub use itunes::MetadataClient;
