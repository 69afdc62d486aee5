use core::{Direction, Game, InputJournal, InputRecord};
use macroquad::prelude::KeyCode;

/// Arrow keys plus the `W/A/S/D` aliases.
pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Direction::Up),
        KeyCode::Down | KeyCode::S => Some(Direction::Down),
        KeyCode::Left | KeyCode::A => Some(Direction::Left),
        KeyCode::Right | KeyCode::D => Some(Direction::Right),
        _ => None,
    }
}

#[derive(Default)]
pub struct AppState {
    /// Every direction queued this session, keyed by the tick it was queued before.
    pub journal: InputJournal,
    /// Inputs accepted during the current frame's `tick()` call.
    /// Drained by the caller after each tick to persist the journal.
    pub accepted_inputs: Vec<InputRecord>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue this frame's direction keys, then run one simulation tick if
    /// the pacer says one is due. Returns whether a tick ran.
    pub fn tick(&mut self, game: &mut Game, keys_pressed: &[KeyCode], tick_due: bool) -> bool {
        self.accepted_inputs.clear();

        for direction in keys_pressed.iter().copied().filter_map(direction_for_key) {
            let record = InputRecord { tick: game.current_tick(), direction };
            game.queue_input(direction);
            self.journal.append(record.tick, record.direction);
            self.accepted_inputs.push(record);
        }

        if tick_due {
            game.update();
        }
        tick_due
    }
}
