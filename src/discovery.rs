//! Discovery of the whitelisted pro matches played during a time window.

use opendota_api::{MatchId, OpenDotaResponse, ProMatchesApi};
use tracing::{debug, info, instrument, warn};

use crate::week::TimeWindow;
use crate::whitelist::TournamentWhitelist;

/// Walk the pro match feed from the newest page backwards and collect the ids
/// of whitelisted matches started inside `window`.
///
/// The feed is descending by match id and start time, so paging stops at the
/// first page whose oldest entry started before the window. An empty page
/// means the feed is exhausted. Entries not older than the cursor were
/// already seen and are ignored.
#[instrument(skip_all, fields(window_start = window.start(), window_end = window.end()))]
pub async fn discover<F>(
    feed: &F,
    tournaments: &TournamentWhitelist,
    window: &TimeWindow,
) -> OpenDotaResponse<Vec<MatchId>>
where
    F: ProMatchesApi + ?Sized,
{
    let mut found = Vec::new();
    let mut cursor: Option<MatchId> = None;
    let mut pages = 0_u32;

    loop {
        let page = feed.get_pro_matches(cursor).await?;
        pages += 1;

        let Some(oldest) = page.last() else {
            debug!(pages, "🔎 Feed exhausted");
            break;
        };

        let mut off_whitelist = 0_usize;
        let unseen = page
            .iter()
            .filter(|m| cursor.is_none_or(|c| m.match_id < c));
        for entry in unseen.filter(|m| window.contains(m.start_time)) {
            if tournaments.contains(entry.league_id) {
                found.push(entry.match_id);
            } else {
                off_whitelist += 1;
            }
        }
        debug!(
            page = pages,
            entries = page.len(),
            off_whitelist,
            oldest_match_id = oldest.match_id,
            "🔎 Page scanned"
        );

        if oldest.start_time < window.start() {
            break;
        }

        if cursor.is_some_and(|c| oldest.match_id >= c) {
            warn!(
                cursor = ?cursor,
                oldest_match_id = oldest.match_id,
                "🔎 ⚠️ Feed cursor did not advance, stopping discovery"
            );
            break;
        }
        cursor = Some(oldest.match_id);
    }

    info!(
        pages,
        matches = found.len(),
        "🔎 ✅ Discovery complete"
    );
    Ok(found)
}
