use serde::Deserialize;

use crate::types::{LeagueId, MatchId};

/// One entry of the `proMatches` feed. The feed carries many more fields, only
/// the ones needed to filter by league and time are kept.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProMatchDto {
    pub match_id: MatchId,
    #[serde(rename = "leagueid")]
    pub league_id: LeagueId,
    /// Unix timestamp in seconds.
    pub start_time: i64,
}
