//! Countdown for the active round.
//!
//! The clock has no notion of wall time. The host calls [`RoundClock::tick`]
//! at whatever cadence it likes, which keeps tests deterministic.

use crate::error::ChainError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Single countdown, measured in abstract units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundClock {
    duration: u64,
    remaining: u64,
}

impl RoundClock {
    /// Creates a clock that is already expired. Call [`reset`](Self::reset)
    /// to arm it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the clock with `duration_units`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidDuration`] for negative durations; the
    /// clock is left unchanged.
    #[instrument(skip(self))]
    pub fn reset(&mut self, duration_units: i64) -> Result<(), ChainError> {
        let duration =
            u64::try_from(duration_units).map_err(|_| ChainError::InvalidDuration(duration_units))?;
        self.duration = duration;
        self.remaining = duration;
        debug!(duration, "Clock reset");
        Ok(())
    }

    /// Advances one unit and returns the remaining units.
    ///
    /// Saturates at zero.
    pub fn tick(&mut self) -> u64 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    /// Returns true once no units remain.
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Units left in the round.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Units the clock was last armed with.
    pub fn duration(&self) -> u64 {
        self.duration
    }
}
