use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::{Board, Cell};
use crate::error::GoError;
use crate::groups::{GroupId, Groups};
use crate::ko::Ko;
use crate::stone::Stone;
use crate::turn::Move;

/// Komi credited to White at the start of a game, in tenths of a point.
pub const DEFAULT_KOMI: u32 = 65;

/// Scores in tenths of a point, indexed by stone color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub black: u32,
    pub white: u32,
}

impl Scores {
    pub fn with_komi(komi: u32) -> Self {
        Scores {
            black: 0,
            white: komi,
        }
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    /// Each captured stone is worth one point.
    fn add_captures(&mut self, stone: Stone, count: usize) {
        let points = count as u32 * 10;
        match stone {
            Stone::Black => self.black += points,
            Stone::White => self.white += points,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    Accepted,
    Rejected(GoError),
}

/// Result of submitting a move: the outcome plus the board as it now stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveResult {
    pub outcome: Outcome,
    /// Row-major cells after the move (unchanged when rejected).
    pub board: Vec<Cell>,
    pub next_turn: Stone,
    /// Opponent stones removed by the move, row-major.
    pub captured: Vec<Point>,
}

impl MoveResult {
    pub fn accepted(&self) -> bool {
        self.outcome == Outcome::Accepted
    }

    pub fn error(&self) -> Option<GoError> {
        match self.outcome {
            Outcome::Accepted => None,
            Outcome::Rejected(e) => Some(e),
        }
    }
}

/// Rule engine for one game: board, side to move and scores.
///
/// Calls must be serialized; each move is validated to completion
/// before the next one is looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    board: Board,
    turn: Stone,
    scores: Scores,
}

impl Engine {
    pub fn new(size: u8) -> Result<Self, GoError> {
        Self::with_komi(size, DEFAULT_KOMI)
    }

    pub fn with_komi(size: u8, komi: u32) -> Result<Self, GoError> {
        Ok(Engine {
            board: Board::new(size)?,
            turn: Stone::Black,
            scores: Scores::with_komi(komi),
        })
    }

    /// Restore an engine from decoded state.
    pub fn from_parts(board: Board, turn: Stone, scores: Scores) -> Self {
        Engine {
            board,
            turn,
            scores,
        }
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn turn(&self) -> Stone {
        self.turn
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn ko(&self) -> Option<Ko> {
        self.board.ko()
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.board.stone_at(point)
    }

    // -- Queries --

    pub fn groups(&self) -> Groups {
        Groups::compute(&self.board)
    }

    pub fn liberties(&self, x: i32, y: i32) -> usize {
        self.groups().liberties(x, y)
    }

    pub fn group_of(&self, x: i32, y: i32) -> Option<GroupId> {
        self.groups().group_of(x, y)
    }

    pub fn is_legal(&self, x: i32, y: i32, stone: Stone) -> bool {
        self.resolve(x, y, stone).is_ok()
    }

    // -- Game actions --

    pub fn apply(&mut self, stone: Stone, mv: Move) -> MoveResult {
        match mv {
            Move::Play { x, y } => self.place_stone(x, y, stone),
            Move::Pass => self.pass(stone),
        }
    }

    pub fn place_stone(&mut self, x: i32, y: i32, stone: Stone) -> MoveResult {
        match self.try_play(x, y, stone) {
            Ok(captured) => self.result(Outcome::Accepted, captured),
            Err(e) => self.result(Outcome::Rejected(e), Vec::new()),
        }
    }

    /// Place a stone and commit the result. Returns the captured points.
    pub fn try_play(&mut self, x: i32, y: i32, stone: Stone) -> Result<Vec<Point>, GoError> {
        let (mut board, captured) = self.resolve(x, y, stone)?;

        board.clear_ko();
        if let Some(ko) = Ko::after_capture(&captured, stone.opp()) {
            board.restrict(ko);
        }

        self.board = board;
        self.scores.add_captures(stone, captured.len());
        self.turn = stone.opp();
        Ok(captured)
    }

    /// Pass: no stones move, any ko restriction lapses.
    pub fn pass(&mut self, stone: Stone) -> MoveResult {
        self.board.clear_ko();
        self.turn = stone.opp();
        self.result(Outcome::Accepted, Vec::new())
    }

    /// Play on a scratch board: captures first, then the suicide check.
    fn resolve(&self, x: i32, y: i32, stone: Stone) -> Result<(Board, Vec<Point>), GoError> {
        if !self.board.on_board(x, y) {
            return Err(GoError::OutOfBounds);
        }

        match self.board.get(x, y) {
            Cell::Stone(_) => return Err(GoError::AlreadyOccupied),
            Cell::KoRestricted(illegal) if illegal == stone => return Err(GoError::KoViolation),
            _ => {}
        }

        let mut board = self.board.clone();
        board.set(x, y, Cell::Stone(stone));

        let mut captured: Vec<Point> = Groups::compute(&board)
            .dead(stone.opp())
            .flat_map(|g| g.stones.iter().copied())
            .collect();
        captured.sort_unstable_by_key(|&(cx, cy)| (cy, cx));

        for &(cx, cy) in &captured {
            board.set(cx as i32, cy as i32, Cell::Empty);
        }

        if Groups::compute(&board).liberties(x, y) == 0 {
            return Err(GoError::Suicide);
        }

        Ok((board, captured))
    }

    fn result(&self, outcome: Outcome, captured: Vec<Point>) -> MoveResult {
        MoveResult {
            outcome,
            board: self.board.cells().to_vec(),
            next_turn: self.turn,
            captured,
        }
    }
}
