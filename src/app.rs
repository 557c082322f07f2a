//! Application module: exposes the presentation model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the current playlist
//! snapshot, grid selection, station and preview state.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
