use serde::{Deserialize, Serialize};
use std::fmt;

/// A move request as submitted by a player, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum Move {
    /// Place a stone. Coordinates are unchecked and may lie off the board.
    Play { x: i32, y: i32 },
    Pass,
}

impl Move {
    pub fn play(x: i32, y: i32) -> Self {
        Move::Play { x, y }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play { x, y } => write!(f, "play {x},{y}"),
            Move::Pass => write!(f, "pass"),
        }
    }
}
