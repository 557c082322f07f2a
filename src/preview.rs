//! Clip preview: one shared audio output, at most one clip playing.
//!
//! `PreviewToggle` is the pure play/pause bookkeeping the UI reads, the
//! `PreviewPlayer` owns the audio thread that actually decodes and plays.

mod fetch;
mod player;
mod sink;
mod thread;
mod toggle;
mod types;

pub use fetch::fetch_clip;
pub use player::PreviewPlayer;
pub use toggle::{PreviewToggle, ToggleOutcome};
pub use types::{PreviewCmd, PreviewEvent};
