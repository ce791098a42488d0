//! Append-only JSON Lines log of mission attempts.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use cosmo_core::AttemptRecord;

pub struct AttemptLog {
    path: PathBuf,
}

impl AttemptLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn append(&self, record: &AttemptRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        let line = serde_json::to_string(record)?;
        writeln!(file, "{}", line)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        log::debug!("recorded attempt for {} in {}", record.student, self.path.display());
        Ok(())
    }

    /// Every record in the file. Blank lines are skipped.
    pub fn read_all(&self) -> Result<Vec<AttemptRecord>> {
        let file = File::open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        let mut records = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line).with_context(|| {
                format!("{}:{}: malformed attempt record", self.path.display(), index + 1)
            })?;
            records.push(record);
        }
        Ok(records)
    }
}
