//! Request and response shapes of `POST /go`.

use gus_engine::{GoError, Move};
use serde::{Deserialize, Serialize};

/// Session value the client sends before it has one.
pub const NEW_SESSION: &str = "new";
pub const DEFAULT_SIZE: u8 = 9;

pub const STATUS_OCCUPIED: i32 = -1;
pub const STATUS_OUT_OF_BOUNDS: i32 = -2;
pub const STATUS_SUICIDE: i32 = -3;
pub const STATUS_KO: i32 = -4;
pub const STATUS_OPPONENT_PASSED: i32 = -5;

#[derive(Debug, Deserialize)]
pub struct GoForm {
    pub x: i32,
    pub y: i32,
    pub session: String,
    #[serde(default)]
    pub signature: String,
    pub size: Option<u8>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoResponse {
    pub session: String,
    pub signature: String,
    pub status: i32,
    pub x: i32,
    pub y: i32,
}

/// What the client asked for, decoded from its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Refresh,
    Move(Move),
}

impl Action {
    pub fn from_coords(x: i32, y: i32) -> Self {
        match (x, y) {
            (-1, -1) => Action::Refresh,
            (-2, -2) => Action::Move(Move::Pass),
            _ => Action::Move(Move::play(x, y)),
        }
    }
}

pub fn status_code(e: GoError) -> i32 {
    match e {
        GoError::AlreadyOccupied => STATUS_OCCUPIED,
        GoError::OutOfBounds | GoError::InvalidSize => STATUS_OUT_OF_BOUNDS,
        GoError::Suicide => STATUS_SUICIDE,
        GoError::KoViolation => STATUS_KO,
    }
}
