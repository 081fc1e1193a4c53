//! In-memory OpenDota stand-in serving canned feed pages and match details.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use opendota_api::{
    ApiRequest, Bytes, LeagueId, MatchId, MatchesApi, OpenDotaError, OpenDotaResponse,
    ProMatchesApi, StatusCode,
};
use serde_json::{Value, json};

#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub match_id: MatchId,
    pub league_id: LeagueId,
    pub start_time: i64,
}

#[derive(Debug, Default)]
pub struct FakeOpenDota {
    /// Newest first
    feed: Vec<FeedEntry>,
    page_size: usize,
    /// Serve the first page whatever the cursor
    replay_first_page: bool,
    /// Answer feed page `n` (0-based) and later with this status
    feed_failure: Option<(usize, StatusCode)>,
    details: HashMap<MatchId, (StatusCode, String)>,
    requests: Mutex<Vec<String>>,
}

impl FakeOpenDota {
    pub fn with_feed(feed: Vec<FeedEntry>, page_size: usize) -> Self {
        Self {
            feed,
            page_size,
            ..Default::default()
        }
    }

    pub fn replaying_first_page(mut self) -> Self {
        self.replay_first_page = true;
        self
    }

    pub fn failing_feed_from(mut self, page: usize, status: StatusCode) -> Self {
        self.feed_failure = Some((page, status));
        self
    }

    pub fn with_detail(mut self, match_id: MatchId, status: StatusCode, body: Value) -> Self {
        self.details.insert(match_id, (status, body.to_string()));
        self
    }

    pub fn with_raw_detail(mut self, match_id: MatchId, body: &str) -> Self {
        self.details
            .insert(match_id, (StatusCode::OK, body.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn page(&self, cursor: Option<MatchId>) -> Vec<Value> {
        let cursor = cursor.filter(|_| !self.replay_first_page);
        self.feed
            .iter()
            .filter(|e| cursor.is_none_or(|c| e.match_id < c))
            .take(self.page_size)
            .map(|e| {
                json!({
                    "match_id": e.match_id,
                    "leagueid": e.league_id,
                    "start_time": e.start_time,
                })
            })
            .collect()
    }
}

#[async_trait]
impl ApiRequest for FakeOpenDota {
    async fn request(&self, path: String) -> OpenDotaResponse<Bytes> {
        let pages_served = {
            let mut requests = self.requests.lock().unwrap();
            let served = requests
                .iter()
                .filter(|p| p.starts_with("/proMatches"))
                .count();
            requests.push(path.clone());
            served
        };

        if let Some(query) = path.strip_prefix("/proMatches") {
            if let Some((_, status)) = self.feed_failure.filter(|(from, _)| pages_served >= *from) {
                return Err(OpenDotaError::Status(status));
            }
            let cursor = query
                .strip_prefix("?less_than_match_id=")
                .and_then(|c| c.parse().ok());
            return Ok(Bytes::from(serde_json::to_vec(&self.page(cursor))?));
        }

        let detail = path
            .strip_prefix("/matches/")
            .and_then(|id| id.parse::<MatchId>().ok())
            .and_then(|id| self.details.get(&id));

        match detail {
            Some((status, body)) if *status == StatusCode::OK => Ok(Bytes::from(body.clone())),
            Some((status, _)) => Err(OpenDotaError::Status(*status)),
            None => Err(OpenDotaError::Status(StatusCode::NOT_FOUND)),
        }
    }
}

impl ProMatchesApi for FakeOpenDota {}
impl MatchesApi for FakeOpenDota {}

/// Detail body of a match with the given id and objective log.
pub fn detail_body(match_id: MatchId, objectives: Value) -> Value {
    json!({
        "match_id": match_id, "leagueid": 16935, "radiant_win": true,
        "dire_team_id": 2163, "radiant_team_id": 8291895, "duration": 2400,
        "radiant_score": 30, "dire_score": 20,
        "tower_status_radiant": 2047, "tower_status_dire": 0,
        "barracks_status_radiant": 63, "barracks_status_dire": 0,
        "objectives": objectives
    })
}
