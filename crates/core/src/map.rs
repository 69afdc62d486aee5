//! The tile grid: loading, cell access, bulk lock removal and drawing.

use crate::level::LevelError;
use crate::lock::LockType;
use crate::render::{Surface, fill_cell};
use crate::tile::{RawTile, Tile};
use crate::types::Pos;

mod gravity;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Map {
    /// An open room: Unbreakable border, Air inside.
    pub fn new(width: usize, height: usize) -> Self {
        let tiles = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| {
                    let border = y == 0 || x == 0 || y + 1 == height || x + 1 == width;
                    if border { Tile::Unbreakable } else { Tile::Air }
                })
            })
            .collect();
        Self { width, height, tiles }
    }

    /// Build a map from rows of raw tile codes. The table must be rectangular.
    pub fn load(rows: &[Vec<u8>]) -> Result<Self, LevelError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(LevelError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LevelError::Ragged { row: y, expected: width, found: row.len() });
            }
            for (x, &code) in row.iter().enumerate() {
                let raw = RawTile::from_code(code)
                    .ok_or(LevelError::UnknownTileCode { row: y, col: x, code })?;
                tiles.push(Tile::from(raw));
            }
        }

        Ok(Self { width, height: rows.len(), tiles })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Cells outside the grid read as `Unbreakable`.
    pub fn tile_at(&self, pos: Pos) -> Tile {
        if !self.in_bounds(pos) {
            return Tile::Unbreakable;
        }
        self.tiles[self.index(pos)]
    }

    pub fn set_tile(&mut self, pos: Pos, tile: Tile) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn is_air(&self, pos: Pos) -> bool {
        self.tile_at(pos).is_air()
    }

    /// Origin becomes Air, destination becomes the player marker.
    pub fn move_player(&mut self, from: Pos, to: Pos) {
        self.set_tile(from, Tile::Air);
        self.set_tile(to, Tile::Player);
    }

    /// Replace every lock of `lock` with Air, row-major. Returns how many went.
    pub fn remove_locks(&mut self, lock: LockType) -> usize {
        let mut removed = 0;
        for tile in self.tiles.iter_mut().filter(|tile| lock.check(**tile)) {
            *tile = Tile::Air;
            removed += 1;
        }
        removed
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Tile)> + '_ {
        self.tiles.iter().enumerate().map(|(idx, tile)| {
            let pos = Pos { y: (idx / self.width) as i32, x: (idx % self.width) as i32 };
            (pos, *tile)
        })
    }

    pub fn count(&self, predicate: impl Fn(Tile) -> bool) -> usize {
        self.tiles.iter().filter(|tile| predicate(**tile)).count()
    }

    /// Every cell holding the player marker, row-major.
    pub fn player_cells(&self) -> Vec<Pos> {
        self.cells().filter(|(_, tile)| *tile == Tile::Player).map(|(pos, _)| pos).collect()
    }

    /// Repaint every cell that has a color. No dirty tracking.
    pub fn draw(&self, surface: &mut impl Surface, tile_size: f32) {
        for (pos, tile) in self.cells() {
            if let Some(color) = tile.color() {
                fill_cell(surface, pos, tile_size, color);
            }
        }
    }

    /// Raw codes, one row per grid row.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.tiles
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|tile| tile.raw().code()).collect())
            .collect()
    }

    /// One glyph per cell, rows separated by newlines.
    pub fn render_text(&self) -> String {
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for row in self.tiles.chunks(self.width.max(1)) {
            text.extend(row.iter().map(|tile| tile.glyph()));
            text.push('\n');
        }
        text
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}
