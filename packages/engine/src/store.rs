use thiserror::Error;

use crate::stats::SessionStats;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store data: {0}")]
    Format(String),
}

/// Where statistics and the bankroll live between rounds. The engine
/// reads once when a session opens and writes once per resolved round;
/// the storage medium is the caller's choice.
pub trait StatsStore {
    /// Saved statistics, or `None` when nothing has been persisted yet.
    fn load_stats(&self) -> Result<Option<SessionStats>, StoreError>;

    /// Saved bankroll, or `None` when nothing has been persisted yet.
    fn load_balance(&self) -> Result<Option<u32>, StoreError>;

    fn save_stats(&mut self, stats: &SessionStats) -> Result<(), StoreError>;

    fn save_balance(&mut self, balance: u32) -> Result<(), StoreError>;
}

/// Keeps everything in memory. Backs tests and the simulator.
#[derive(Debug, Default)]
pub struct MemoryStore {
    stats: Option<SessionStats>,
    balance: Option<u32>,
}

impl StatsStore for MemoryStore {
    fn load_stats(&self) -> Result<Option<SessionStats>, StoreError> {
        Ok(self.stats.clone())
    }

    fn load_balance(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.balance)
    }

    fn save_stats(&mut self, stats: &SessionStats) -> Result<(), StoreError> {
        self.stats = Some(stats.clone());
        Ok(())
    }

    fn save_balance(&mut self, balance: u32) -> Result<(), StoreError> {
        self.balance = Some(balance);
        Ok(())
    }
}
