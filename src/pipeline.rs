//! One poll cycle: fetch the station page, extract tracks, enrich them.

use crate::config::Settings;
use crate::enrich::MetadataClient;
use crate::error::Result;
use crate::scrape::{extractor_for, fetch_page};
use crate::station::Station;
use crate::track::Track;

/// Shared, cheaply clonable handle running fetch → parse → enrich.
#[derive(Debug, Clone)]
pub struct Pipeline {
    http: reqwest::Client,
    settings: Settings,
    metadata: MetadataClient,
}

impl Pipeline {
    pub fn new(http: reqwest::Client, settings: Settings) -> Self {
        let metadata = MetadataClient::new(http.clone(), settings.enrich.clone());
        Self {
            http,
            settings,
            metadata,
        }
    }

    /// Build a pipeline with its own HTTP client.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::new(http, settings))
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run one cycle, surfacing page fetch failures.
    ///
    /// Individual metadata lookups never fail the cycle.
    pub async fn try_fetch_playlist(&self, station: &Station) -> Result<Vec<Track>> {
        let html = fetch_page(&self.http, station, &self.settings.scrape).await?;

        let mut tracks = extractor_for(station.extractor, &self.settings.scrape).extract(&html);
        let found = tracks.len();
        tracks.truncate(self.settings.scrape.max_tracks);
        log::info!(
            "{}: extracted {found} tracks, keeping {}",
            station.name,
            tracks.len()
        );

        let tracks = self.metadata.enrich_all(tracks).await;
        log::debug!(
            "{}: {} of {} tracks enriched",
            station.name,
            tracks.iter().filter(|t| t.is_enriched()).count(),
            tracks.len()
        );
        Ok(tracks)
    }

    /// Run one cycle. Every failure collapses into an empty playlist.
    pub async fn fetch_playlist(&self, station: &Station) -> Vec<Track> {
        match self.try_fetch_playlist(station).await {
            Ok(tracks) => tracks,
            Err(err) => {
                log::error!("error scraping {} playlist: {err}", station.name);
                Vec::new()
            }
        }
    }
}
