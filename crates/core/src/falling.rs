//! Gravity classification for loose tiles (stones and boxes).
//!
//! A loose tile carries its `FallingState` by value. The state is re-derived
//! every tick from the tile underneath, so there is no settling delay: a tile
//! with Air below is falling, anything else is resting.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FallingState {
    Falling,
    Resting,
}

impl FallingState {
    pub fn is_falling(self) -> bool {
        matches!(self, FallingState::Falling)
    }

    pub fn is_resting(self) -> bool {
        matches!(self, FallingState::Resting)
    }

    /// A tile in free fall cannot be pushed sideways.
    pub fn allows_push(self) -> bool {
        self.is_resting()
    }
}

/// Result of resolving gravity for one loose tile during a map sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GravityStep {
    /// The tile moved one row down.
    Dropped,
    /// The tile was falling and has come to rest on something.
    Landed,
    /// The tile was already resting and stays put.
    Settled,
}
