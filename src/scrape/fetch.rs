use std::time::Duration;

use reqwest::header::USER_AGENT;

use crate::config::ScrapeSettings;
use crate::error::{Error, Result};
use crate::station::Station;

/// Download the playlist page of `station`, through the relay when the station asks for it.
///
/// One attempt only; any non-success status is an error.
pub async fn fetch_page(
    client: &reqwest::Client,
    station: &Station,
    settings: &ScrapeSettings,
) -> Result<String> {
    let url = station.source_url(&settings.relay_url);
    log::debug!("fetching {} playlist from {url}", station.name);

    let mut request = client.get(&url);
    if let Some(agent) = &settings.user_agent {
        request = request.header(USER_AGENT, agent);
    }
    if let Some(secs) = settings.timeout_secs {
        request = request.timeout(Duration::from_secs(secs));
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status { url, status });
    }

    Ok(response.text().await?)
}
