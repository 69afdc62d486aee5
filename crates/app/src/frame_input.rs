//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const MOVE_KEYS: [KeyCode; 8] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
];

#[derive(Default)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = MOVE_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();
    FrameInput { keys_pressed }
}
