use serde::{Deserialize, Serialize};

use crate::lock::LockType;
use crate::tile::Tile;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Pos {
        let (dy, dx) = direction.delta();
        Pos { y: self.y + dy, x: self.x + dx }
    }

    pub fn below(self) -> Pos {
        Pos { y: self.y + 1, x: self.x }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Row and column offset as `(dy, dx)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Parse a move letter (`U`, `D`, `L`, `R`, any case).
    pub fn from_char(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

/// Order in which queued inputs are drained at the start of a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputOrder {
    /// Oldest command first.
    #[default]
    Fifo,
    /// Newest command first.
    Lifo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Rgb {
        Rgb { r: ((hex >> 16) & 0xff) as u8, g: ((hex >> 8) & 0xff) as u8, b: (hex & 0xff) as u8 }
    }
}

/// What happened when the player tried to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { to: Pos },
    Pushed { tile: Tile, to: Pos },
    CollectedKey { lock: LockType, locks_removed: usize },
    Blocked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    PlayerMoved { from: Pos, to: Pos },
    TilePushed { tile: Tile, from: Pos, to: Pos },
    KeyCollected { lock: LockType, locks_removed: usize },
    MoveBlocked { direction: Direction, target: Tile },
    TileLanded { pos: Pos },
}
