//! Station page scraping: fetch the raw markup, then turn it into tracks.
//!
//! The two halves are independent. `fetch` only knows about HTTP; the
//! extractors in `extract` only see a markup string, so page layouts can be
//! swapped or fixture-tested without touching the network.

mod extract;
mod fetch;

pub use extract::{Extractor, extractor_for};
pub use fetch::fetch_page;
