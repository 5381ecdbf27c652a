use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

/// A stone color. Serialized as `1` (black) / `-1` (white).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Turn digit used by the session string: `0` black, `1` white.
    pub fn digit(self) -> u8 {
        match self {
            Stone::Black => 0,
            Stone::White => 1,
        }
    }

    pub fn from_digit(d: u8) -> Option<Self> {
        match d {
            0 => Some(Stone::Black),
            1 => Some(Stone::White),
            _ => None,
        }
    }

    /// Board picture character.
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' => Some(Stone::Black),
            'O' => Some(Stone::White),
            _ => None,
        }
    }
}

impl Neg for Stone {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "black"),
            Stone::White => write!(f, "white"),
        }
    }
}
