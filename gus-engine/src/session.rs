//! Packed session string exchanged with the rendering client.
//!
//! Layout (version 1), space separated:
//!
//! ```text
//! SSSS T KKKK BBBB WWWW <cells> 1
//! ```
//!
//! The browser client indexes the first six fields by position, so the
//! version trails them. `SSSS` board size, `T` side to move (`0` black, `1` white), `KKKK`
//! row-major index of the ko-restricted point or `-001`, `BBBB`/`WWWW`
//! scores in tenths, and one character per cell: `+` vacant, `X` black,
//! `O` white.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Cell, MAX_SIZE};
use crate::engine::{Engine, Scores};
use crate::ko::Ko;
use crate::stone::Stone;

pub const SESSION_VERSION: &str = "1";

const TOKENS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    TokenCount { expected: usize, found: usize },
    UnsupportedVersion(String),
    InvalidNumber { field: &'static str, value: String },
    InvalidSize(u32),
    InvalidTurn(u8),
    InvalidKo(i32),
    CellCount { expected: usize, found: usize },
    InvalidCell { index: usize, found: char },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::TokenCount { expected, found } => {
                write!(f, "expected {expected} tokens, found {found}")
            }
            SessionError::UnsupportedVersion(v) => write!(f, "unsupported session version '{v}'"),
            SessionError::InvalidNumber { field, value } => {
                write!(f, "invalid {field} '{value}'")
            }
            SessionError::InvalidSize(size) => write!(f, "invalid board size {size}"),
            SessionError::InvalidTurn(turn) => write!(f, "invalid turn {turn}"),
            SessionError::InvalidKo(ko) => write!(f, "invalid ko point {ko}"),
            SessionError::CellCount { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
            SessionError::InvalidCell { index, found } => {
                write!(f, "invalid cell '{found}' at index {index}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Serialize the engine state into a session string.
pub fn encode(engine: &Engine) -> String {
    let board = engine.board();
    let ko = engine
        .ko()
        .and_then(|ko| board.index(ko.pos.0 as i32, ko.pos.1 as i32))
        .map_or(-1, |i| i as i64);
    let cells: String = board.cells().iter().map(|c| c.symbol()).collect();
    let scores = engine.scores();

    format!(
        "{:04} {} {:04} {:04} {:04} {cells} {SESSION_VERSION}",
        board.size(),
        engine.turn().digit(),
        ko,
        scores.black,
        scores.white,
    )
}

/// Parse and validate a session string.
pub fn decode(text: &str) -> Result<Engine, SessionError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [size, turn, ko, black, white, cells, version] = tokens[..] else {
        return Err(SessionError::TokenCount {
            expected: TOKENS,
            found: tokens.len(),
        });
    };

    if version != SESSION_VERSION {
        return Err(SessionError::UnsupportedVersion(version.to_string()));
    }

    let size: u32 = number("size", size)?;
    if size == 0 || size > MAX_SIZE as u32 {
        return Err(SessionError::InvalidSize(size));
    }
    let turn: u8 = number("turn", turn)?;
    let turn = Stone::from_digit(turn).ok_or(SessionError::InvalidTurn(turn))?;
    let ko: i32 = number("ko", ko)?;
    let scores = Scores {
        black: number("black score", black)?,
        white: number("white score", white)?,
    };

    let expected = (size * size) as usize;
    let found = cells.chars().count();
    if found != expected {
        return Err(SessionError::CellCount { expected, found });
    }
    let cells = cells
        .chars()
        .enumerate()
        .map(|(index, c)| match c {
            '+' => Ok(Cell::Empty),
            _ => Stone::from_symbol(c)
                .map(Cell::Stone)
                .ok_or(SessionError::InvalidCell { index, found: c }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut board =
        Board::from_cells(size as u8, cells).map_err(|_| SessionError::InvalidSize(size))?;

    if ko != -1 {
        let index = usize::try_from(ko).map_err(|_| SessionError::InvalidKo(ko))?;
        if index >= expected || !board.cells()[index].is_vacant() {
            return Err(SessionError::InvalidKo(ko));
        }
        board.restrict(Ko {
            pos: board.point(index),
            illegal: turn,
        });
    }

    Ok(Engine::from_parts(board, turn, scores))
}

fn number<T: FromStr>(field: &'static str, value: &str) -> Result<T, SessionError> {
    value.parse().map_err(|_| SessionError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
