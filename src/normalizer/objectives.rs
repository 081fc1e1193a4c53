use opendota_api::{ObjectiveDto, matches::objective_type};

use super::side::Side;

/// First occurrence of an objective: who took it and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstEvent {
    /// `None` when the event lacks the field needed for attribution.
    pub side: Option<Side>,
    pub time: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObjectiveSummary {
    pub first_blood: Option<FirstEvent>,
    pub first_tower: Option<FirstEvent>,
    pub first_roshan: Option<FirstEvent>,
    pub first_rax: Option<FirstEvent>,
    pub total_roshans: u32,
}

impl ObjectiveSummary {
    /// Summarize an objective log given in chronological order.
    pub fn from_objectives(objectives: &[ObjectiveDto]) -> Self {
        let first_blood = first_of(objectives, |o| o.is(objective_type::FIRST_BLOOD)).map(|o| {
            FirstEvent {
                side: o.player_slot.map(Side::from_player_slot),
                time: o.time,
            }
        });

        let first_tower =
            first_of(objectives, |o| o.is(objective_type::BUILDING_KILL)).map(building_event);

        let first_rax = first_of(objectives, |o| {
            o.is(objective_type::BUILDING_KILL) && o.key_str().is_some_and(is_barracks)
        })
        .map(building_event);

        let first_roshan =
            first_of(objectives, |o| o.is(objective_type::ROSHAN_KILL)).map(|o| FirstEvent {
                side: o.team.map(Side::from_roshan_team),
                time: o.time,
            });

        let total_roshans = objectives
            .iter()
            .filter(|o| o.is(objective_type::ROSHAN_KILL))
            .count() as u32;

        Self {
            first_blood,
            first_tower,
            first_roshan,
            first_rax,
            total_roshans,
        }
    }
}

fn first_of(
    objectives: &[ObjectiveDto],
    predicate: impl Fn(&ObjectiveDto) -> bool,
) -> Option<&ObjectiveDto> {
    objectives.iter().find(|o| predicate(o))
}

fn building_event(objective: &ObjectiveDto) -> FirstEvent {
    FirstEvent {
        side: objective.key_str().map(Side::destroyer_of),
        time: objective.time,
    }
}

fn is_barracks(key: &str) -> bool {
    key.contains("rax")
}
