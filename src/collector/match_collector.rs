use opendota_api::{MatchId, MatchesApi, OpenDotaError, StatusCode};
use tracing::{Span, debug, info, instrument, warn};

use super::throttle::Throttle;
use crate::error::Result;
use crate::normalizer::{NormalizedMatchRow, normalize};
use crate::storage::MatchTable;

/// Destination of normalized rows.
pub trait RowSink {
    fn append(&mut self, row: &NormalizedMatchRow) -> Result<()>;
}

impl RowSink for MatchTable {
    fn append(&mut self, row: &NormalizedMatchRow) -> Result<()> {
        MatchTable::append(self, row)
    }
}

impl RowSink for Vec<NormalizedMatchRow> {
    fn append(&mut self, row: &NormalizedMatchRow) -> Result<()> {
        self.push(row.clone());
        Ok(())
    }
}

/// Why a match produced no row.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error("upstream answered {0}")]
    Upstream(StatusCode),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed match record: {0}")]
    Malformed(String),
}

impl From<OpenDotaError> for SkipReason {
    fn from(err: OpenDotaError) -> Self {
        match err {
            OpenDotaError::Status(status) => SkipReason::Upstream(status),
            OpenDotaError::Reqwest(e) => SkipReason::Transport(e.to_string()),
            OpenDotaError::Serde(e) => SkipReason::Malformed(e.to_string()),
        }
    }
}

#[derive(Debug)]
pub struct SkippedMatch {
    pub match_id: MatchId,
    pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct CollectionReport {
    pub written: usize,
    pub skipped: Vec<SkippedMatch>,
}

impl CollectionReport {
    pub fn log(&self) {
        info!(
            written = self.written,
            skipped = self.skipped.len(),
            "📦 ✅ Collection finished"
        );
        for skipped in &self.skipped {
            warn!(
                match_id = skipped.match_id,
                reason = %skipped.reason,
                "📦 ⚠️ Match skipped"
            );
        }
    }
}

/// Fetch, normalize and store every match of `ids`, in order.
///
/// A match that cannot be fetched or decoded is skipped and reported, the
/// batch goes on. Failing to write to `sink` aborts the batch.
#[instrument(skip_all, fields(matches = ids.len(), written))]
pub async fn collect<A, T, S>(
    api: &A,
    throttle: &T,
    ids: &[MatchId],
    sink: &mut S,
) -> Result<CollectionReport>
where
    A: MatchesApi + ?Sized,
    T: Throttle + ?Sized,
    S: RowSink + ?Sized,
{
    let mut report = CollectionReport::default();

    for &match_id in ids {
        throttle.acquire().await;

        let match_data = match api.get_match(match_id).await {
            Ok(data) => data,
            Err(e) => {
                let reason = SkipReason::from(e);
                warn!(match_id, reason = %reason, "📦 ⚠️ Could not fetch match");
                report.skipped.push(SkippedMatch { match_id, reason });
                continue;
            }
        };

        let row = normalize(&match_data);
        sink.append(&row).map_err(|e| {
            warn!(match_id, error = %e, "📦 ❌ Could not store match row");
            e
        })?;
        report.written += 1;

        debug!(
            match_id,
            has_objectives = match_data.objectives.is_some(),
            "📦 Match stored"
        );
    }

    Span::current().record("written", report.written);
    Ok(report)
}
