//! Flattening of a match detail record into one fixed-schema row.

use opendota_api::{LeagueId, MatchDto, MatchId};
use serde::Serialize;

pub mod objectives;
pub mod side;
pub mod structures;

use objectives::{FirstEvent, ObjectiveSummary};
pub use side::Side;
use structures::StructureLosses;

/// One output row. Field order is the column order of the weekly table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedMatchRow {
    pub match_id: MatchId,
    pub league_id: LeagueId,
    pub winner: Side,
    pub dire_team_id: Option<u64>,
    pub radiant_team_id: Option<u64>,
    pub duration: u32,
    pub total_kills: u32,
    pub kill_diff: u32,
    pub first_blood: Option<Side>,
    pub fb_time: Option<i64>,
    pub total_towers: u32,
    pub tower_diff: u32,
    pub first_tower: Option<Side>,
    pub first_tower_time: Option<i64>,
    pub total_roshans: Option<u32>,
    pub first_roshan: Option<Side>,
    pub first_roshan_time: Option<i64>,
    pub total_rax: u32,
    pub first_rax: Option<Side>,
    pub first_rax_time: Option<i64>,
}

pub const COLUMNS: [&str; 20] = [
    "match_id",
    "league_id",
    "winner",
    "dire_team_id",
    "radiant_team_id",
    "duration",
    "total_kills",
    "kill_diff",
    "first_blood",
    "fb_time",
    "total_towers",
    "tower_diff",
    "first_tower",
    "first_tower_time",
    "total_roshans",
    "first_roshan",
    "first_roshan_time",
    "total_rax",
    "first_rax",
    "first_rax_time",
];

/// Derive the row of a match. Event derived columns are all empty when the
/// match has no objective log.
pub fn normalize(record: &MatchDto) -> NormalizedMatchRow {
    let towers = StructureLosses::towers(record.tower_status_radiant, record.tower_status_dire);
    let barracks =
        StructureLosses::barracks(record.barracks_status_radiant, record.barracks_status_dire);

    let summary = record
        .objectives
        .as_deref()
        .map(ObjectiveSummary::from_objectives);

    let pick = |f: fn(&ObjectiveSummary) -> Option<FirstEvent>| summary.as_ref().and_then(f);
    let first_blood = pick(|s| s.first_blood);
    let first_tower = pick(|s| s.first_tower);
    let first_roshan = pick(|s| s.first_roshan);
    let first_rax = pick(|s| s.first_rax);

    NormalizedMatchRow {
        match_id: record.match_id,
        league_id: record.league_id,
        winner: Side::from_win_flag(record.radiant_win),
        dire_team_id: record.dire_team_id,
        radiant_team_id: record.radiant_team_id,
        duration: record.duration,
        total_kills: record.radiant_score + record.dire_score,
        kill_diff: record.radiant_score.abs_diff(record.dire_score),
        first_blood: first_blood.and_then(|e| e.side),
        fb_time: first_blood.map(|e| e.time),
        total_towers: towers.total(),
        tower_diff: towers.diff(),
        first_tower: first_tower.and_then(|e| e.side),
        first_tower_time: first_tower.map(|e| e.time),
        total_roshans: summary.as_ref().map(|s| s.total_roshans),
        first_roshan: first_roshan.and_then(|e| e.side),
        first_roshan_time: first_roshan.map(|e| e.time),
        total_rax: barracks.total(),
        first_rax: first_rax.and_then(|e| e.side),
        first_rax_time: first_rax.map(|e| e.time),
    }
}
