// src/core/net.rs
// One async HTTP GET; the caller owns decoding. No retries.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::config::options::FetchOptions;

pub fn build_client(opts: &FetchOptions) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .timeout(Duration::from_millis(opts.timeout_ms))
        .user_agent(opts.user_agent.clone());
    if !opts.use_system_proxy {
        builder = builder.no_proxy();
    }
    builder.build()
}

/// GET `url` and return the raw body. Non-2xx statuses are errors.
pub async fn http_get_bytes(client: &Client, url: Url) -> Result<Vec<u8>, reqwest::Error> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    logd!("HTTP: status {}", status);
    let resp = resp.error_for_status()?;
    Ok(resp.bytes().await?.to_vec())
}
