//! Per-tick gravity sweep over the grid.
//!
//! Rows are visited bottom to top so that a tile vacated in row `y` is
//! already Air when row `y - 1` is evaluated. A whole stack of loose tiles
//! therefore moves down together in a single pass.

use super::Map;
use crate::falling::{FallingState, GravityStep};
use crate::tile::Tile;
use crate::types::Pos;

impl Map {
    /// Resolve gravity for every cell. Returns the cells where a falling tile
    /// came to rest during this pass.
    pub fn update(&mut self) -> Vec<Pos> {
        let mut landed = Vec::new();
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let pos = Pos { y: y as i32, x: x as i32 };
                if self.update_tile(pos) == Some(GravityStep::Landed) {
                    landed.push(pos);
                }
            }
        }
        landed
    }

    /// Re-derive a loose tile's state from what is underneath and drop it one
    /// row if unsupported. Static tiles return `None`.
    pub fn update_tile(&mut self, pos: Pos) -> Option<GravityStep> {
        let tile = self.tile_at(pos);
        let previous = tile.falling_state()?;
        let state = self.tile_at(pos.below()).block_on_top_state();
        self.set_tile(pos, tile.with_falling_state(state));

        let step = match state {
            FallingState::Falling => {
                self.drop_tile(pos);
                GravityStep::Dropped
            }
            FallingState::Resting if previous.is_falling() => GravityStep::Landed,
            FallingState::Resting => GravityStep::Settled,
        };
        Some(step)
    }

    /// Move the falling tile at `pos` one row down, leaving Air behind.
    /// Resting and static tiles stay where they are.
    pub fn drop_tile(&mut self, pos: Pos) {
        let below = pos.below();
        let tile = self.tile_at(pos);
        if !tile.is_falling() || !self.in_bounds(below) {
            return;
        }
        self.set_tile(below, tile);
        self.set_tile(pos, Tile::Air);
    }
}
