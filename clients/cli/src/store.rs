use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use blackjack_engine::{SessionStats, StatsStore, StoreError};

/// Disk-backed store: statistics as a JSON document and the bankroll as
/// a bare integer, one file each under the data directory.
pub struct FileStore {
    stats_path: PathBuf,
    balance_path: PathBuf,
}

impl FileStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            stats_path: dir.join("stats.json"),
            balance_path: dir.join("balance"),
        }
    }

    fn read_optional(path: &Path) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn write(path: &Path, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(())
    }
}

impl StatsStore for FileStore {
    fn load_stats(&self) -> Result<Option<SessionStats>, StoreError> {
        match Self::read_optional(&self.stats_path)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::Format(e.to_string())),
            None => Ok(None),
        }
    }

    fn load_balance(&self) -> Result<Option<u32>, StoreError> {
        match Self::read_optional(&self.balance_path)? {
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|e| StoreError::Format(format!("balance: {e}"))),
            None => Ok(None),
        }
    }

    fn save_stats(&mut self, stats: &SessionStats) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(stats)
            .map_err(|e| StoreError::Format(e.to_string()))?;
        Self::write(&self.stats_path, &json)
    }

    fn save_balance(&mut self, balance: u32) -> Result<(), StoreError> {
        Self::write(&self.balance_path, &balance.to_string())
    }
}
