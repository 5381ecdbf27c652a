use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a placement was refused, or a board could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoError {
    OutOfBounds,
    AlreadyOccupied,
    Suicide,
    KoViolation,
    InvalidSize,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfBounds => write!(f, "out of bounds"),
            GoError::AlreadyOccupied => write!(f, "already occupied"),
            GoError::Suicide => write!(f, "suicide"),
            GoError::KoViolation => write!(f, "ko violation"),
            GoError::InvalidSize => write!(f, "invalid board size"),
        }
    }
}

impl std::error::Error for GoError {}
