use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use opendota_api::LeagueId;
use serde::Deserialize;

use crate::error::{AppError, Result};

/// Leagues eligible for collection.
#[derive(Debug, Clone, Default)]
pub struct TournamentWhitelist(HashSet<LeagueId>);

#[derive(Deserialize)]
struct WhitelistRecord {
    league_id: LeagueId,
}

impl TournamentWhitelist {
    /// Load the whitelist from a CSV file having a `league_id` column.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| AppError::from_io_at(e, path))?;
        let whitelist = Self::from_reader(file, path)?;

        tracing::info!(
            leagues = whitelist.len(),
            path = %path.display(),
            "📋 Tournament whitelist loaded"
        );
        Ok(whitelist)
    }

    fn from_reader(reader: impl Read, path: &Path) -> Result<Self> {
        let mut csv = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut ids = HashSet::new();

        for (idx, record) in csv.deserialize::<WhitelistRecord>().enumerate() {
            let record = record.map_err(|e| AppError::InvalidFile {
                path: path.to_path_buf(),
                // header is line 1
                line: idx + 2,
                message: e.to_string(),
            })?;
            ids.insert(record.league_id);
        }

        Ok(Self(ids))
    }

    pub fn contains(&self, league_id: LeagueId) -> bool {
        self.0.contains(&league_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<LeagueId> for TournamentWhitelist {
    fn from_iter<T: IntoIterator<Item = LeagueId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
