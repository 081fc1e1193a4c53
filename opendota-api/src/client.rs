use std::{fmt::Debug, num::NonZeroU32, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use nonzero_ext::nonzero;
use reqwest::StatusCode;

use crate::{
    metrics::RequestMetrics,
    traits::{ApiRequest, MatchesApi, ProMatchesApi},
    types::{OpenDotaError, OpenDotaResponse},
};

pub const DEFAULT_BASE_URL: &str = "https://api.opendota.com/api";

#[derive(Debug)]
pub struct ApiClient {
    pub client: reqwest::Client,
    pub limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    base_url: String,
    /// OpenDota API key, requests are anonymous without one
    key: Option<String>,
    pub metrics: Arc<RequestMetrics>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, per_minute: NonZeroU32) -> Self {
        let q = Quota::per_minute(per_minute).allow_burst(per_minute.min(nonzero!(10_u32)));

        Self {
            client: reqwest::Client::new(),
            limiter: RateLimiter::direct(q),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            key: api_key,
            metrics: RequestMetrics::new("opendota"),
        }
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self) -> tokio::task::JoinHandle<()> {
        let metrics = self.metrics.clone();
        tokio::spawn(async move { metrics.log_loop().await })
    }
}

#[async_trait]
impl ApiRequest for ApiClient {
    async fn request(&self, path: String) -> OpenDotaResponse<Bytes> {
        // Ensure we stay below the configured quota before doing any request
        self.limiter.until_ready().await;
        self.metrics.inc();

        let mut req = self.client.get(format!("{}{}", self.base_url, path));
        if let Some(key) = &self.key {
            req = req.query(&[("api_key", key)]);
        }

        let res = req.send().await.map_err(OpenDotaError::Reqwest)?;
        match res.status() {
            StatusCode::OK => res.bytes().await.map_err(OpenDotaError::Reqwest),
            status => Err(OpenDotaError::Status(status)),
        }
    }
}

impl ProMatchesApi for ApiClient {}
impl MatchesApi for ApiClient {}

#[cfg(test)]
mod tests {
    use nonzero_ext::nonzero;

    use super::*;

    #[tokio::test]
    async fn request_propagates_reqwest_error() {
        let client = ApiClient::new("ht!tp://invalid-url", None, nonzero!(60_u32)); // incorrect schema

        let res = client.request("/proMatches".to_string()).await;

        assert!(matches!(res, Err(OpenDotaError::Reqwest(_))));
        assert_eq!(client.metrics.total(), 1);
    }

    #[test]
    fn burst_never_exceeds_the_per_minute_quota() {
        let client = ApiClient::new(DEFAULT_BASE_URL, None, nonzero!(3_u32));

        for _ in 0..3 {
            assert!(client.limiter.check().is_ok());
        }
        assert!(client.limiter.check().is_err());
    }

    #[test]
    fn default_burst_is_capped_at_ten() {
        let client = ApiClient::new(DEFAULT_BASE_URL, None, nonzero!(600_u32));

        for _ in 0..10 {
            assert!(client.limiter.check().is_ok());
        }
        assert!(client.limiter.check().is_err());
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = ApiClient::new("https://api.opendota.com/api/", None, nonzero!(60_u32));

        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
