//! Application model types: `App` and the grid helpers.

use std::time::Instant;

use crate::preview::{PreviewToggle, ToggleOutcome};
use crate::station::{Station, StationRegistry};
use crate::track::Track;

/// Number of grid columns for a terminal `width` in cells.
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..60 => 2,
        60..90 => 3,
        90..120 => 4,
        _ => 5,
    }
}

/// The main application model.
pub struct App {
    pub registry: StationRegistry,
    pub station: Station,
    /// Latest applied playlist; replaced wholesale per cycle.
    pub tracks: Vec<Track>,
    pub selected: usize,
    pub preview: PreviewToggle,
    pub metadata_window: bool,
    pub last_refresh: Option<Instant>,
    pub columns: usize,

    fixed_columns: Option<usize>,
    in_flight: usize,
    applied_seq: u64,
}

impl App {
    /// Create a new `App` showing `station`, with an empty snapshot.
    pub fn new(registry: StationRegistry, station: Station, fixed_columns: Option<usize>) -> Self {
        Self {
            registry,
            station,
            tracks: Vec::new(),
            selected: 0,
            preview: PreviewToggle::new(),
            metadata_window: false,
            last_refresh: None,
            columns: fixed_columns.unwrap_or(columns_for_width(0)).max(1),
            fixed_columns,
            in_flight: 0,
            applied_seq: 0,
        }
    }

    pub fn toggle_metadata_window(&mut self) {
        self.metadata_window = !self.metadata_window;
    }

    /// Recompute the column count for a terminal `width`, unless it is fixed.
    pub fn set_width(&mut self, width: u16) {
        self.columns = self
            .fixed_columns
            .unwrap_or_else(|| columns_for_width(width))
            .max(1);
    }

    /// A poll cycle was spawned.
    pub fn cycle_started(&mut self) {
        self.in_flight += 1;
    }

    /// A poll cycle finished. Returns true when its tracks became the snapshot.
    ///
    /// Results for another station, or older than the newest applied cycle, are dropped.
    pub fn apply_cycle(&mut self, seq: u64, station_id: &str, tracks: Vec<Track>) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if station_id != self.station.id {
            log::debug!("dropping cycle {seq} for {station_id}, now showing {}", self.station.id);
            return false;
        }
        if seq < self.applied_seq {
            log::debug!("dropping stale cycle {seq}, already showing {}", self.applied_seq);
            return false;
        }

        self.tracks = tracks;
        self.applied_seq = seq;
        self.last_refresh = Some(Instant::now());
        self.clamp_selected();
        true
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Placeholders are shown only while the first result for a station is pending.
    pub fn show_skeletons(&self) -> bool {
        self.is_loading() && self.tracks.is_empty()
    }

    pub fn seconds_since_refresh(&self) -> Option<u64> {
        self.last_refresh.map(|at| at.elapsed().as_secs())
    }

    /// Switch to `station`: clear the snapshot and the preview.
    pub fn switch_station(&mut self, station: Station) {
        log::info!("switching to {}", station.name);
        self.station = station;
        self.tracks.clear();
        self.selected = 0;
        self.preview.clear();
        self.metadata_window = false;
        self.last_refresh = None;
    }

    /// Switch to the station after the current one. Returns false with a single station.
    pub fn next_station(&mut self) -> bool {
        let Some(next) = self.registry.next_after(&self.station.id).cloned() else {
            return false;
        };
        if next.id == self.station.id {
            return false;
        }
        self.switch_station(next);
        true
    }

    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.tracks.get(self.selected)
    }

    /// Toggle the preview of the selected card. `None` when it has no preview clip.
    pub fn toggle_selected_preview(&mut self) -> Option<ToggleOutcome> {
        let url = self.selected_track()?.preview_url.clone()?;
        Some(self.preview.toggle(&url))
    }

    /// Whether the card at `index` is the one whose preview is playing.
    pub fn is_card_playing(&self, index: usize) -> bool {
        self.tracks
            .get(index)
            .and_then(|t| t.preview_url.as_deref())
            .is_some_and(|url| self.preview.is_playing(url))
    }

    fn clamp_selected(&mut self) {
        self.selected = self.selected.min(self.tracks.len().saturating_sub(1));
    }

    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.selected + 1 < self.tracks.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
    }

    /// Move one row down; from the row above a short last row, land on its last card.
    pub fn move_down(&mut self) {
        let Some(last) = self.tracks.len().checked_sub(1) else {
            return;
        };
        let below = self.selected + self.columns;
        if below <= last {
            self.selected = below;
        } else if self.selected / self.columns < last / self.columns {
            self.selected = last;
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.tracks.len().saturating_sub(1);
    }
}
