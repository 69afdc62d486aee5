use serde::{Deserialize, Serialize};

use crate::tile::Tile;
use crate::types::Rgb;

const COLOR_ONE: Rgb = Rgb::from_hex(0xffcc00);
const COLOR_TWO: Rgb = Rgb::from_hex(0x00ccff);

/// Color identity shared by a key and the locks it dissolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockType {
    One,
    Two,
}

impl LockType {
    /// True iff `tile` is a lock of this color.
    pub fn check(self, tile: Tile) -> bool {
        match self {
            LockType::One => tile.is_lock1(),
            LockType::Two => tile.is_lock2(),
        }
    }

    pub fn is_lock1(self) -> bool {
        self == LockType::One
    }

    pub fn is_lock2(self) -> bool {
        self == LockType::Two
    }

    pub fn color(self) -> Rgb {
        match self {
            LockType::One => COLOR_ONE,
            LockType::Two => COLOR_TWO,
        }
    }

    pub fn key_color(self) -> Rgb {
        self.color()
    }
}
