use futures::future::join_all;
use serde::Deserialize;
use url::Url;

use crate::config::EnrichSettings;
use crate::error::Result;
use crate::track::Track;

/// Body of a search response. Only the fields we copy are decoded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// 100x100 artwork; the size is part of the URL.
    #[serde(rename = "artworkUrl100")]
    pub artwork_url_100: Option<String>,
    pub preview_url: Option<String>,
    pub collection_name: Option<String>,
}

/// Merge a search hit into `track`, asking for `artwork_size` square artwork.
pub fn apply_result(track: Track, result: SearchResult, artwork_size: u32) -> Track {
    let size = format!("{artwork_size}x{artwork_size}");
    Track {
        cover_url: result
            .artwork_url_100
            .map(|url| url.replacen("100x100", &size, 1)),
        preview_url: result.preview_url,
        collection_name: result.collection_name,
        ..track
    }
}

/// Client for the metadata search endpoint.
#[derive(Debug, Clone)]
pub struct MetadataClient {
    http: reqwest::Client,
    settings: EnrichSettings,
}

impl MetadataClient {
    pub fn new(http: reqwest::Client, settings: EnrichSettings) -> Self {
        Self { http, settings }
    }

    /// Search URL for one track: free-text `artist title`, first hit only.
    pub fn search_url(&self, track: &Track) -> Result<Url> {
        let term = format!("{} {}", track.artist, track.title);
        let url = Url::parse_with_params(
            &self.settings.search_url,
            &[
                ("term", term.as_str()),
                ("media", self.settings.media.as_str()),
                ("limit", "1"),
            ],
        )?;
        Ok(url)
    }

    /// Look up the first search hit for `track`.
    ///
    /// A non-success status counts as "no hit"; transport and decoding problems are errors.
    pub async fn search(&self, track: &Track) -> Result<Option<SearchResult>> {
        let url = self.search_url(track)?;
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            log::debug!(
                "metadata search for {} answered {}",
                track.display(),
                response.status()
            );
            return Ok(None);
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.results.into_iter().next())
    }

    /// Enrich one track. Never fails: on any problem the track comes back unchanged.
    pub async fn enrich_track(&self, track: Track) -> Track {
        match self.search(&track).await {
            Ok(Some(result)) => apply_result(track, result, self.settings.artwork_size),
            Ok(None) => {
                log::debug!("no metadata found for {}", track.display());
                track
            }
            Err(err) => {
                log::warn!("failed to fetch metadata for {}: {err}", track.display());
                track
            }
        }
    }

    /// Enrich all tracks concurrently, keeping their order.
    pub async fn enrich_all(&self, tracks: Vec<Track>) -> Vec<Track> {
        if !self.settings.enabled {
            return tracks;
        }
        join_all(tracks.into_iter().map(|track| self.enrich_track(track))).await
    }
}
