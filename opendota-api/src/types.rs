use thiserror::Error;

/// OpenDota match identifier, also used as the pagination cursor of the pro feed.
pub type MatchId = u64;

/// OpenDota league (tournament) identifier.
pub type LeagueId = u32;

#[derive(Debug, Error)]
pub enum OpenDotaError {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP status error: {0}")]
    Status(reqwest::StatusCode),

    #[error("Decoding raw response error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A call to the OpenDota API can either result in a success with the success type or fail with an [`OpenDotaError`].
pub type OpenDotaResponse<T> = Result<T, OpenDotaError>;
