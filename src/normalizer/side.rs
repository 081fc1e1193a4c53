use serde::Serialize;

/// The two factions of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Radiant,
    Dire,
}

/// High bit of a player slot, set for Dire players (slots 128..=132).
const DIRE_SLOT_BIT: u32 = 0x80;

/// Team value of Roshan kill messages for a Radiant kill.
const RADIANT_TEAM: u32 = 2;

/// Faction marker of Dire owned unit names.
const DIRE_UNIT_MARKER: &str = "badguys";

impl Side {
    pub fn from_win_flag(radiant_win: bool) -> Self {
        if radiant_win { Side::Radiant } else { Side::Dire }
    }

    pub fn from_player_slot(slot: u32) -> Self {
        if slot & DIRE_SLOT_BIT != 0 {
            Side::Dire
        } else {
            Side::Radiant
        }
    }

    pub fn from_roshan_team(team: u32) -> Self {
        if team == RADIANT_TEAM {
            Side::Radiant
        } else {
            Side::Dire
        }
    }

    /// Side that destroyed the building named `key`, i.e. the opposite of its owner.
    pub fn destroyer_of(key: &str) -> Self {
        if key.contains(DIRE_UNIT_MARKER) {
            Side::Radiant
        } else {
            Side::Dire
        }
    }
}
