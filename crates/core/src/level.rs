//! Level layouts in the numeric tile encoding.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub rows: Vec<Vec<u8>>,
}

impl Level {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<u8>>) -> Self {
        Self { name: name.into(), rows }
    }

    /// The stock layout the game ships with.
    pub fn builtin() -> Self {
        Self::new(
            "builtin",
            vec![
                vec![2, 2, 2, 2, 2, 2, 2, 2],
                vec![2, 3, 0, 1, 1, 2, 0, 2],
                vec![2, 4, 2, 6, 1, 2, 0, 2],
                vec![2, 8, 4, 1, 1, 2, 0, 2],
                vec![2, 4, 1, 1, 1, 9, 0, 2],
                vec![2, 2, 2, 2, 2, 2, 2, 2],
            ],
        )
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Why a level encoding could not be turned into a playable map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// No rows, or a first row with no cells.
    Empty,
    /// A row's length differs from the first row's.
    Ragged { row: usize, expected: usize, found: usize },
    /// A cell holds a code outside the tile table.
    UnknownTileCode { row: usize, col: usize, code: u8 },
    MissingPlayer,
    MultiplePlayers { first: Pos, second: Pos },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "level has no cells"),
            Self::Ragged { row, expected, found } => {
                write!(f, "level row {row} has {found} cells, expected {expected}")
            }
            Self::UnknownTileCode { row, col, code } => {
                write!(f, "unknown tile code {code} at row {row}, column {col}")
            }
            Self::MissingPlayer => write!(f, "level has no player cell"),
            Self::MultiplePlayers { first, second } => write!(
                f,
                "level has more than one player cell: ({}, {}) and ({}, {})",
                first.y, first.x, second.y, second.x
            ),
        }
    }
}

impl Error for LevelError {}
