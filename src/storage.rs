//! Weekly files: the discovered match id list and the normalized match table.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use opendota_api::MatchId;

use crate::error::{AppError, Result};
use crate::normalizer::{COLUMNS, NormalizedMatchRow};

/// Locations of the files belonging to one ISO week.
#[derive(Debug, Clone)]
pub struct WeeklyFiles {
    data_dir: PathBuf,
    week: u32,
}

impl WeeklyFiles {
    pub fn new(data_dir: impl Into<PathBuf>, week: u32) -> Self {
        Self {
            data_dir: data_dir.into(),
            week,
        }
    }

    pub fn ids_path(&self) -> PathBuf {
        self.data_dir
            .join("weekly_match_ids")
            .join(format!("matches_w{}.txt", self.week))
    }

    pub fn table_path(&self) -> PathBuf {
        self.data_dir
            .join("weekly_match_data")
            .join(format!("data_w{}.csv", self.week))
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Write one id per line, replacing any previous list.
pub fn write_match_ids(path: &Path, ids: &[MatchId]) -> Result<()> {
    ensure_parent(path)?;

    let mut out = BufWriter::new(File::create(path)?);
    for id in ids {
        writeln!(out, "{id}")?;
    }
    out.flush()?;

    tracing::info!(count = ids.len(), path = %path.display(), "💾 Match ids stored");
    Ok(())
}

pub fn read_match_ids(path: &Path) -> Result<Vec<MatchId>> {
    let file = File::open(path).map_err(|e| AppError::from_io_at(e, path))?;

    let mut ids = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let id = trimmed.parse::<MatchId>().map_err(|e| AppError::InvalidFile {
            path: path.to_path_buf(),
            line: idx + 1,
            message: format!("{trimmed:?} is not a match id ({e})"),
        })?;
        ids.push(id);
    }

    Ok(ids)
}

/// Append-only CSV table of normalized rows.
pub struct MatchTable {
    writer: csv::Writer<File>,
}

impl MatchTable {
    /// Open the table for appending, writing the header when the file is new or empty.
    pub fn open(path: &Path) -> Result<Self> {
        ensure_parent(path)?;

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let is_new = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if is_new {
            writer.write_record(COLUMNS)?;
            writer.flush()?;
            tracing::debug!(path = %path.display(), "💾 Created match table");
        }

        Ok(Self { writer })
    }

    pub fn append(&mut self, row: &NormalizedMatchRow) -> Result<()> {
        self.writer.serialize(row)?;
        self.writer.flush()?;
        Ok(())
    }
}
