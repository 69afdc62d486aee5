pub mod falling;
pub mod game;
pub mod journal;
pub mod level;
pub mod lock;
pub mod map;
pub mod render;
pub mod replay;
pub mod tile;
pub mod types;

pub use falling::{FallingState, GravityStep};
pub use game::Game;
pub use journal::{InputJournal, InputRecord};
pub use level::{Level, LevelError};
pub use lock::LockType;
pub use map::Map;
pub use render::{DEFAULT_TILE_SIZE, FillRect, RecordingSurface, Surface};
pub use replay::*;
pub use tile::{RawTile, Tile};
pub use types::*;
