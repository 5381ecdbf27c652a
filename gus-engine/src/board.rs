use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::GoError;
use crate::ko::Ko;
use crate::stone::Stone;

/// Largest supported board side.
pub const MAX_SIZE: u8 = 25;

/// State of a single intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "stone", rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    Stone(Stone),
    /// Vacant point the given color may not play on next (simplified ko).
    KoRestricted(Stone),
}

impl Cell {
    pub fn stone(self) -> Option<Stone> {
        match self {
            Cell::Stone(s) => Some(s),
            _ => None,
        }
    }

    /// True for `Empty` and `KoRestricted`: no stone sits here.
    pub fn is_vacant(self) -> bool {
        !matches!(self, Cell::Stone(_))
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Stone(s) => s.symbol(),
            _ => '+',
        }
    }
}

/// Square board stored as a flat row-major array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of side `size`.
    pub fn new(size: u8) -> Result<Self, GoError> {
        if size == 0 || size > MAX_SIZE {
            return Err(GoError::InvalidSize);
        }
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size as usize * size as usize],
        })
    }

    /// Restore a board from its row-major cells.
    pub fn from_cells(size: u8, cells: Vec<Cell>) -> Result<Self, GoError> {
        if size == 0 || size > MAX_SIZE || cells.len() != size as usize * size as usize {
            return Err(GoError::InvalidSize);
        }
        Ok(Board { size, cells })
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Read a cell. Anything off the board reads as `Empty`.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        match self.index(x, y) {
            Some(i) => self.cells[i],
            None => Cell::Empty,
        }
    }

    /// Write a cell. Off-board writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn on_board(&self, x: i32, y: i32) -> bool {
        let size = self.size as i32;
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.on_board(x, y) {
            Some(y as usize * self.size as usize + x as usize)
        } else {
            None
        }
    }

    pub fn point(&self, index: usize) -> Point {
        let size = self.size as usize;
        ((index % size) as u8, (index / size) as u8)
    }

    pub fn stone_at(&self, (x, y): Point) -> Option<Stone> {
        self.get(x as i32, y as i32).stone()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_vacant())
    }

    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Stone(stone)).count()
    }

    /// Get the 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (x, y): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if x > 0 {
            result.push((x - 1, y));
        }
        if x + 1 < self.size {
            result.push((x + 1, y));
        }
        if y > 0 {
            result.push((x, y - 1));
        }
        if y + 1 < self.size {
            result.push((x, y + 1));
        }
        result
    }

    // -- Ko --

    /// The restricted point, if any.
    pub fn ko(&self) -> Option<Ko> {
        self.cells.iter().enumerate().find_map(|(i, c)| match c {
            Cell::KoRestricted(illegal) => Some(Ko {
                pos: self.point(i),
                illegal: *illegal,
            }),
            _ => None,
        })
    }

    pub fn clear_ko(&mut self) {
        for c in self.cells.iter_mut() {
            if let Cell::KoRestricted(_) = c {
                *c = Cell::Empty;
            }
        }
    }

    pub fn restrict(&mut self, ko: Ko) {
        let (x, y) = ko.pos;
        if self.get(x as i32, y as i32).is_vacant() {
            self.set(x as i32, y as i32, Cell::KoRestricted(ko.illegal));
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size as usize) {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Test helper: build a board from an ASCII layout. 'X' = Black, 'O' = White, '+' = Empty.
#[cfg(test)]
pub(crate) fn board_from_layout(layout: &[&str]) -> Board {
    let size = layout.len() as u8;
    let cells = layout
        .iter()
        .flat_map(|row| row.chars())
        .map(|c| match Stone::from_symbol(c) {
            Some(s) => Cell::Stone(s),
            None => Cell::Empty,
        })
        .collect();
    Board::from_cells(size, cells).expect("layout must be square")
}
