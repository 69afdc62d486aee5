//! Headless replay of an input journal against a level.

use std::error::Error;
use std::fmt;

use crate::game::Game;
use crate::journal::InputJournal;
use crate::level::{Level, LevelError};
use crate::types::{InputOrder, Pos};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    Level(LevelError),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(err) => write!(f, "replay level is invalid: {err}"),
        }
    }
}

impl Error for ReplayError {}

impl From<LevelError> for ReplayError {
    fn from(err: LevelError) -> Self {
        Self::Level(err)
    }
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_tick: u64,
    pub final_snapshot_hash: u64,
    pub player: Pos,
}

/// Run `level` headless, queueing each journal record just before the update
/// of its tick. Runs until every input has been applied and at least
/// `min_ticks` ticks have passed.
pub fn replay_to_end(
    level: &Level,
    journal: &InputJournal,
    min_ticks: u64,
    input_order: InputOrder,
) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::new(level)?.with_input_order(input_order);
    run_journal(&mut game, journal, min_ticks);
    Ok(ReplayResult {
        final_tick: game.current_tick(),
        final_snapshot_hash: game.snapshot_hash(),
        player: game.player(),
    })
}

/// Drive an existing game through `journal`. Returns the number of ticks run.
pub fn run_journal(game: &mut Game, journal: &InputJournal, min_ticks: u64) -> u64 {
    let end = journal.end_tick().max(min_ticks);
    let start = game.current_tick();
    while game.current_tick() < end {
        for direction in journal.inputs_at(game.current_tick()) {
            game.queue_input(direction);
        }
        game.update();
    }
    game.current_tick() - start
}
