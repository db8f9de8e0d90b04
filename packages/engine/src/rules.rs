use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Table configuration. The defaults encode the product rule set; every
/// bound is enforced again by the engine even though the presentation
/// layer disables out-of-range controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    /// Table minimum wager.
    pub min_wager: u32,

    /// Table maximum wager.
    pub max_wager: u32,

    /// Increment used by the bet stepping controls.
    pub wager_step: u32,

    /// Dealer draws below this total and stands at or above it,
    /// soft totals included.
    pub dealer_stand_total: u8,

    /// Bankroll granted when no saved balance exists.
    pub starting_balance: u32,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            min_wager: 50,
            max_wager: 500,
            wager_step: 50,
            dealer_stand_total: 17,
            starting_balance: 1000,
        }
    }
}

impl TableRules {
    /// Largest wager currently allowed: the table maximum capped by the
    /// bankroll.
    pub fn wager_cap(&self, balance: u32) -> u32 {
        self.max_wager.min(balance)
    }

    pub fn validate_wager(&self, wager: u32, balance: u32) -> Result<(), EngineError> {
        let max = self.wager_cap(balance);
        if wager < self.min_wager || wager > max {
            return Err(EngineError::InvalidWager {
                wager,
                min: self.min_wager,
                max,
            });
        }
        Ok(())
    }

    /// Bump the wager one step, clamped to the table and bankroll.
    pub fn step_up(&self, wager: u32, balance: u32) -> u32 {
        (wager + self.wager_step).min(self.wager_cap(balance).max(self.min_wager))
    }

    /// Drop the wager one step, never below the table minimum.
    pub fn step_down(&self, wager: u32) -> u32 {
        wager.saturating_sub(self.wager_step).max(self.min_wager)
    }

    /// Clamp a requested wager into the allowed range.
    pub fn clamp_wager(&self, wager: u32, balance: u32) -> u32 {
        let cap = self.wager_cap(balance).max(self.min_wager);
        wager.clamp(self.min_wager, cap)
    }
}
