mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result};

/// Fetches one source document and returns its body as text.
///
/// A non-2xx status is treated as a transport failure; there are no
/// retries.
pub async fn fetch_text<C: HttpClient>(client: &C, url: &str) -> Result<String> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client
        .execute(req)
        .await
        .and_then(|resp| resp.error_for_status())
        .with_context(|| format!("fetching {url}"))?;

    Ok(resp.text().await?)
}
