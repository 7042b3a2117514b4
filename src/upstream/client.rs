//! HTTP client for the open-data flight board.
//!
//! # Responsibilities
//! - Build the datastore search URL from configuration
//! - Issue one GET per call, no retries, no caching
//! - Decode the response into raw and typed records
//! - Report latency and outcome to metrics

use std::time::{Duration, Instant};

use reqwest::Client;
use url::Url;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::types::{parse_board, FlightBoard, UpstreamError, UpstreamResult};

/// Fetches the current flight board from the datastore API.
#[derive(Debug, Clone)]
pub struct FlightFetcher {
    client: Client,
    url: Url,
}

impl FlightFetcher {
    /// Create a fetcher from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let url = search_url(config)?;

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if config.no_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(UpstreamError::Client)?;

        tracing::info!(url = %url, "Flight fetcher initialized");
        Ok(Self { client, url })
    }

    /// The fully-qualified URL requested on every fetch.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Pull a fresh copy of the flight board.
    pub async fn fetch_board(&self) -> UpstreamResult<FlightBoard> {
        let start = Instant::now();
        let result = self.fetch_inner().await;

        match &result {
            Ok(board) => {
                tracing::debug!(
                    records = board.records.len(),
                    flights = board.flights.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Fetched flight board"
                );
                metrics::record_upstream_fetch(true, start);
                metrics::record_upstream_records(board.records.len());
            }
            Err(e) => {
                tracing::error!(url = %self.url, error = %e, "Flight board fetch failed");
                metrics::record_upstream_fetch(false, start);
            }
        }

        result
    }

    async fn fetch_inner(&self) -> UpstreamResult<FlightBoard> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body = response.bytes().await?;
        parse_board(&body)
    }
}

fn search_url(config: &UpstreamConfig) -> UpstreamResult<Url> {
    let mut url = Url::parse(&config.base_url)?;

    url.query_pairs_mut()
        .append_pair("resource_id", &config.resource_id)
        .append_pair("limit", &config.limit.to_string());

    Ok(url)
}
