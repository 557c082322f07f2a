//! Radio stations and where their playlist pages live.

use crate::config::StationSettings;
use crate::error::{Error, Result};

pub use crate::config::StationSettings as Station;

impl Station {
    /// URL actually requested for this station's page.
    ///
    /// Relayed stations get the percent-encoded page URL appended to `relay_prefix`.
    pub fn source_url(&self, relay_prefix: &str) -> String {
        if self.use_relay {
            let encoded: String = url::form_urlencoded::byte_serialize(self.page_url.as_bytes())
                .collect();
            format!("{relay_prefix}{encoded}")
        } else {
            self.page_url.clone()
        }
    }

    /// Accent colour parsed from `#RRGGBB`.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Ordered set of configured stations.
#[derive(Debug, Clone)]
pub struct StationRegistry {
    stations: Vec<Station>,
}

impl StationRegistry {
    pub fn new(stations: Vec<StationSettings>) -> Self {
        Self { stations }
    }

    pub fn all(&self) -> &[Station] {
        &self.stations
    }

    pub fn find(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// Like [`find`](Self::find), but an unknown id is an error.
    pub fn get(&self, id: &str) -> Result<&Station> {
        self.find(id)
            .ok_or_else(|| Error::UnknownStation(id.to_string()))
    }

    /// The station following `id`, wrapping around. Unknown ids yield the first station.
    pub fn next_after(&self, id: &str) -> Option<&Station> {
        if self.stations.is_empty() {
            return None;
        }
        let next = match self.stations.iter().position(|s| s.id == id) {
            Some(p) => (p + 1) % self.stations.len(),
            None => 0,
        };
        self.stations.get(next)
    }
}
