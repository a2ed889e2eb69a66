use reqwest::{header::HeaderMap, Client, StatusCode};

use crate::{info_time, Result};

/// A fetched page, kept as-is. The body is not decoded here.
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// URL after redirects.
    pub url: String,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Issues a single GET to `url` and returns the whole response.
///
/// The status is not checked: a 4xx/5xx page is returned like any other so its body
/// still gets parsed. Only transport failures are errors.
pub async fn fetch(client: &Client, url: &str) -> Result<PageResponse> {
    info_time!("Requesting page: {url}");

    let res = client.get(url).send().await?;
    let status = res.status();
    if !status.is_success() {
        tracing::warn!(%status, url, "non-success status, parsing body anyway");
    }

    let final_url = res.url().to_string();
    let headers = res.headers().clone();
    let body = res.bytes().await?.to_vec();

    Ok(PageResponse {
        url: final_url,
        status,
        headers,
        body,
    })
}
