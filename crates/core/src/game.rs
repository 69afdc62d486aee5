use std::collections::VecDeque;

use crate::level::{Level, LevelError};
use crate::map::Map;
use crate::render::{Surface, fill_cell};
use crate::tile::PLAYER_COLOR;
use crate::types::*;

mod hash;
mod movement;

#[cfg(test)]
mod test_support;

/// Simulation state: grid, player position and pending input, advanced one
/// tick at a time by the frame driver.
pub struct Game {
    map: Map,
    player: Pos,
    inputs: VecDeque<Direction>,
    input_order: InputOrder,
    tick: u64,
    log: Vec<LogEvent>,
}

impl Game {
    pub fn new(level: &Level) -> Result<Self, LevelError> {
        let map = Map::load(&level.rows)?;
        Self::from_map(map)
    }

    /// Wrap an already built map. It must contain exactly one player cell.
    pub fn from_map(map: Map) -> Result<Self, LevelError> {
        let player = match map.player_cells().as_slice() {
            [] => return Err(LevelError::MissingPlayer),
            [only] => *only,
            [first, second, ..] => {
                return Err(LevelError::MultiplePlayers { first: *first, second: *second });
            }
        };
        log::debug!(
            "loaded {}x{} map, player at ({}, {})",
            map.width(),
            map.height(),
            player.y,
            player.x
        );

        Ok(Self {
            map,
            player,
            inputs: VecDeque::new(),
            input_order: InputOrder::default(),
            tick: 0,
            log: Vec::new(),
        })
    }

    pub fn with_input_order(mut self, input_order: InputOrder) -> Self {
        self.input_order = input_order;
        self
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn input_order(&self) -> InputOrder {
        self.input_order
    }

    pub fn pending_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn queue_input(&mut self, direction: Direction) {
        self.inputs.push_back(direction);
    }

    /// Drain every queued input, applying each move in turn.
    pub fn handle_inputs(&mut self) {
        loop {
            let next = match self.input_order {
                InputOrder::Fifo => self.inputs.pop_front(),
                InputOrder::Lifo => self.inputs.pop_back(),
            };
            let Some(direction) = next else {
                break;
            };
            self.move_player(direction);
        }
    }

    /// One simulation tick: inputs first, then the gravity sweep.
    pub fn update(&mut self) {
        self.handle_inputs();
        for pos in self.map.update() {
            self.log.push(LogEvent::TileLanded { pos });
        }
        self.tick += 1;
    }

    pub fn draw(&self, surface: &mut impl Surface, tile_size: f32) {
        self.map.draw(surface, tile_size);
        fill_cell(surface, self.player, tile_size, PLAYER_COLOR);
    }
}
