use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::error::StoreResult;
use super::traits::HistorySink;
use super::types::{HistoryRecord, HistorySummary};

/// [`HistorySink`] appending one JSON object per line to a file.
///
/// The file and its parent directory are created on first append. Existing lines are never
/// rewritten.
#[derive(Debug)]
pub struct JsonlHistoryLog {
    path: PathBuf,
    // Serializes appends so concurrent lines never interleave.
    write_lock: Mutex<()>,
}

impl JsonlHistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record back. A missing file reads as empty.
    pub fn read_all(&self) -> StoreResult<Vec<HistoryRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }
        Ok(records)
    }

    pub fn summary(&self) -> StoreResult<HistorySummary> {
        let records = self.read_all()?;
        Ok(HistorySummary {
            total: records.len(),
            similar: records.iter().filter(|r| r.is_similar).count(),
        })
    }
}

impl HistorySink for JsonlHistoryLog {
    fn append(&self, record: HistoryRecord) -> StoreResult<()> {
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let _guard = self.write_lock.lock();

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
