use serde::{Deserialize, Serialize};

/// One playlist entry as scraped from a station page, optionally enriched with
/// search metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub artist: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    /// `HH:MM` the station reported for this entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub played_at: Option<String>,
}

impl Track {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_played_at(mut self, played_at: Option<String>) -> Self {
        self.played_at = played_at;
        self
    }

    /// `Artist - Title`, used for search queries and log lines.
    pub fn display(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }

    pub fn is_enriched(&self) -> bool {
        self.cover_url.is_some() || self.preview_url.is_some() || self.collection_name.is_some()
    }
}

/// Body of a playlist response: `{"tracks": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Playlist {
    pub tracks: Vec<Track>,
}
