//! One-ply opponent: tries every vacant point and keeps the one whose
//! resulting liberty balance rates best under the chosen strategy.

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::engine::Engine;
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Maximize own liberties.
    Expand,
    /// Minimize the opponent's liberties.
    Pressure,
    /// Own liberties minus the opponent's.
    Balance,
    /// Own liberties over the opponent's.
    Ratio,
    /// Opponent liberties over own, negated.
    InverseRatio,
}

impl Strategy {
    /// Range of [`Strategy::from_roll`] inputs.
    pub const ROLLS: u32 = 22;

    /// Weighted pick: 5 Expand, 10 Pressure, 2 Balance, 2 Ratio, 3 InverseRatio.
    pub fn from_roll(roll: u32) -> Self {
        match roll % Self::ROLLS {
            0..5 => Strategy::Expand,
            5..15 => Strategy::Pressure,
            15..17 => Strategy::Balance,
            17..19 => Strategy::Ratio,
            _ => Strategy::InverseRatio,
        }
    }

    fn rate(self, mine: f64, theirs: f64) -> f64 {
        match self {
            Strategy::Expand => mine,
            Strategy::Pressure => -theirs,
            Strategy::Balance => mine - theirs,
            Strategy::Ratio => mine / (theirs + 1.0),
            Strategy::InverseRatio => -theirs / (mine + 1.0),
        }
    }
}

/// Best point for `stone`, or `None` when no placement is legal.
///
/// Ties go to the first point in row-major order.
pub fn predict(engine: &Engine, stone: Stone, strategy: Strategy) -> Option<Point> {
    let board = engine.board();
    let mut best: Option<(Point, f64)> = None;

    for (i, cell) in board.cells().iter().enumerate() {
        if !cell.is_vacant() {
            continue;
        }
        let (x, y) = board.point(i);
        let mut trial = engine.clone();
        if trial.try_play(x as i32, y as i32, stone).is_err() {
            continue;
        }

        let rating = strategy.rate(strength(&trial, stone), strength(&trial, stone.opp()));
        if best.is_none_or(|(_, r)| rating > r) {
            best = Some(((x, y), rating));
        }
    }

    best.map(|(p, _)| p)
}

/// Liberties of all groups plus a third of the stone count.
fn strength(engine: &Engine, stone: Stone) -> f64 {
    let liberties = engine.groups().liberty_total(stone);
    let stones = engine.board().count(stone);
    (liberties + stones / 3) as f64
}
