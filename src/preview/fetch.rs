use crate::error::{Error, Result};

/// Download a preview clip into memory.
pub async fn fetch_clip(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status,
        });
    }
    let bytes = response.bytes().await?;
    log::debug!("downloaded {} bytes of preview {url}", bytes.len());
    Ok(bytes.to_vec())
}
