//! Paints the game onto the macroquad frame.

use core::{Game, Rgb, Surface};
use macroquad::prelude::{Color, WHITE, clear_background, draw_rectangle};

const BACKGROUND: Color = WHITE;

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

/// Immediate-mode surface: every fill goes straight to the current frame.
pub struct MacroquadSurface;

impl Surface for MacroquadSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        draw_rectangle(x, y, width, height, to_color(color));
    }
}

pub fn draw_frame(game: &Game, tile_size: f32) {
    clear_background(BACKGROUND);
    game.draw(&mut MacroquadSurface, tile_size);
}
