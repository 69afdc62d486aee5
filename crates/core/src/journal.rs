use serde::{Deserialize, Serialize};

use crate::types::Direction;

/// Directional inputs keyed by the tick they were queued before.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub tick: u64,
    pub direction: Direction,
}

impl InputJournal {
    pub fn new() -> Self {
        Self { format_version: 1, inputs: Vec::new() }
    }

    /// One move per tick starting at tick 0, e.g. `"RRDL"`. Unknown letters
    /// are returned as the error.
    pub fn from_moves(moves: &str) -> Result<Self, char> {
        let mut journal = Self::new();
        for (tick, c) in moves.chars().filter(|c| !c.is_whitespace()).enumerate() {
            let direction = Direction::from_char(c).ok_or(c)?;
            journal.append(tick as u64, direction);
        }
        Ok(journal)
    }

    pub fn append(&mut self, tick: u64, direction: Direction) {
        self.inputs.push(InputRecord { tick, direction });
    }

    /// First tick after the last recorded input.
    pub fn end_tick(&self) -> u64 {
        self.inputs.iter().map(|record| record.tick + 1).max().unwrap_or(0)
    }

    /// Inputs recorded for `tick`, in recording order.
    pub fn inputs_at(&self, tick: u64) -> impl Iterator<Item = Direction> + '_ {
        self.inputs
            .iter()
            .filter(move |record| record.tick == tick)
            .map(|record| record.direction)
    }
}

impl Default for InputJournal {
    fn default() -> Self {
        Self::new()
    }
}
