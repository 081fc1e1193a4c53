use std::fmt::Debug;

use async_trait::async_trait;
use bytes::Bytes;

use crate::{
    matches::MatchDto,
    pro_matches::ProMatchDto,
    types::{MatchId, OpenDotaResponse},
};

/// Trait implemented by structures capable of performing raw HTTP requests to the OpenDota API.
///
/// `path` is relative to the API root, query string included (e.g. `/proMatches?less_than_match_id=42`).
#[async_trait]
pub trait ApiRequest: Send + Sync + Debug {
    async fn request(&self, path: String) -> OpenDotaResponse<Bytes>;
}

/// Paginated feed of recently played professional matches, newest first.
#[async_trait]
pub trait ProMatchesApi: ApiRequest {
    /// Fetch one page of the feed. With a cursor, only matches strictly older
    /// than `less_than_match_id` are returned.
    async fn get_pro_matches(
        &self,
        less_than_match_id: Option<MatchId>,
    ) -> OpenDotaResponse<Vec<ProMatchDto>> {
        tracing::trace!(
            "[OPENDOTA::CLIENT] get_pro_matches less_than={:?}",
            less_than_match_id
        );

        let path = match less_than_match_id {
            Some(cursor) => format!("/proMatches?less_than_match_id={cursor}"),
            None => "/proMatches".to_string(),
        };
        let raw = self.request(path).await?;

        Ok(serde_json::from_slice(&raw)?)
    }
}

/// Match detail endpoint.
#[async_trait]
pub trait MatchesApi: ApiRequest {
    async fn get_match(&self, match_id: MatchId) -> OpenDotaResponse<MatchDto> {
        tracing::trace!("[OPENDOTA::CLIENT] get_match {}", match_id);

        let raw = self.request(format!("/matches/{match_id}")).await?;

        Ok(serde_json::from_slice(&raw)?)
    }
}

/// All APIs required by the collector.
pub trait OpenDotaApiFull: ProMatchesApi + MatchesApi {}

impl<T: ProMatchesApi + MatchesApi> OpenDotaApiFull for T {}
