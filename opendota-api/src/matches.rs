use serde::Deserialize;
use serde_json::Value;

use crate::types::{LeagueId, MatchId};

/// Objective type tags consumed by the collector.
pub mod objective_type {
    pub const FIRST_BLOOD: &str = "CHAT_MESSAGE_FIRSTBLOOD";
    pub const BUILDING_KILL: &str = "building_kill";
    pub const ROSHAN_KILL: &str = "CHAT_MESSAGE_ROSHAN_KILL";
}

/// Representation of the match detail response.
#[derive(Deserialize, Debug, Clone)]
pub struct MatchDto {
    pub match_id: MatchId,
    #[serde(rename = "leagueid")]
    pub league_id: LeagueId,
    pub radiant_win: bool,
    #[serde(default)]
    pub dire_team_id: Option<u64>,
    #[serde(default)]
    pub radiant_team_id: Option<u64>,
    /// Match length in seconds.
    pub duration: u32,
    pub radiant_score: u32,
    pub dire_score: u32,
    pub tower_status_radiant: u32,
    pub tower_status_dire: u32,
    pub barracks_status_radiant: u32,
    pub barracks_status_dire: u32,
    /// `null` when the replay was never parsed.
    #[serde(default)]
    pub objectives: Option<Vec<ObjectiveDto>>,
}

/// One entry of the objective log, in chronological order.
#[derive(Deserialize, Debug, Clone)]
pub struct ObjectiveDto {
    #[serde(rename = "type")]
    pub kind: String,
    /// Seconds since the horn, negative before it.
    pub time: i64,
    #[serde(default)]
    pub player_slot: Option<u32>,
    /// Unit name for building kills, a slot number for some chat messages.
    #[serde(default)]
    pub key: Option<Value>,
    #[serde(default)]
    pub team: Option<u32>,
}

impl ObjectiveDto {
    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// The textual key, if any.
    pub fn key_str(&self) -> Option<&str> {
        self.key.as_ref().and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objectives_with_mixed_key_types_decode() {
        let raw = r#"{
            "match_id": 7600000001, "leagueid": 16935, "radiant_win": true,
            "dire_team_id": 2163, "radiant_team_id": 8291895, "duration": 2311,
            "radiant_score": 31, "dire_score": 18,
            "tower_status_radiant": 1974, "tower_status_dire": 0,
            "barracks_status_radiant": 63, "barracks_status_dire": 0,
            "objectives": [
                {"time": 95, "type": "CHAT_MESSAGE_FIRSTBLOOD", "slot": 3, "key": 7, "player_slot": 3},
                {"time": 601, "type": "building_kill", "unit": "npc_dota_hero_lion",
                 "key": "npc_dota_badguys_tower1_mid", "slot": 2, "player_slot": 2},
                {"time": 1200, "type": "CHAT_MESSAGE_ROSHAN_KILL", "team": 2}
            ]
        }"#;

        let detail: MatchDto = serde_json::from_str(raw).unwrap();
        let objectives = detail.objectives.unwrap();

        assert_eq!(objectives.len(), 3);
        assert!(objectives[0].is(objective_type::FIRST_BLOOD));
        assert_eq!(objectives[0].key_str(), None);
        assert_eq!(objectives[1].key_str(), Some("npc_dota_badguys_tower1_mid"));
        assert_eq!(objectives[2].team, Some(2));
        assert_eq!(detail.radiant_team_id, Some(8291895));
    }

    #[test]
    fn null_objectives_and_team_ids_decode() {
        let raw = r#"{
            "match_id": 1, "leagueid": 2, "radiant_win": false,
            "dire_team_id": null, "duration": 1500,
            "radiant_score": 5, "dire_score": 25,
            "tower_status_radiant": 0, "tower_status_dire": 2047,
            "barracks_status_radiant": 0, "barracks_status_dire": 63,
            "objectives": null
        }"#;

        let detail: MatchDto = serde_json::from_str(raw).unwrap();

        assert!(detail.objectives.is_none());
        assert!(detail.dire_team_id.is_none());
        assert!(detail.radiant_team_id.is_none());
    }
}
