//! Small OpenDota API client used by the weekly collector.
//!
//! The library offers typed wrappers around the two REST endpoints needed to
//! gather professional matches: the paginated `proMatches` feed and the match
//! detail endpoint.

pub mod client;
pub mod matches;
pub mod metrics;
pub mod pro_matches;
pub mod traits;
pub mod types;

pub use bytes::Bytes;
pub use client::ApiClient;
pub use matches::{MatchDto, ObjectiveDto};
pub use pro_matches::ProMatchDto;
pub use reqwest::StatusCode;
pub use traits::{ApiRequest, MatchesApi, OpenDotaApiFull, ProMatchesApi};
pub use types::{LeagueId, MatchId, OpenDotaError, OpenDotaResponse};
