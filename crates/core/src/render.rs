//! Drawing seam between the engine and whatever paints the frame.
//! The engine only ever asks for solid squares; the surface decides how.

use crate::types::{Pos, Rgb};

pub const DEFAULT_TILE_SIZE: f32 = 30.0;

pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb);
}

/// Paint the square for grid cell `pos`.
pub fn fill_cell(surface: &mut impl Surface, pos: Pos, tile_size: f32, color: Rgb) {
    surface.fill_rect(
        pos.x as f32 * tile_size,
        pos.y as f32 * tile_size,
        tile_size,
        tile_size,
        color,
    );
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
}

/// Surface that keeps every draw call, for headless runs and tests.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub rects: Vec<FillRect>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.rects.push(FillRect { x, y, width, height, color });
    }
}
