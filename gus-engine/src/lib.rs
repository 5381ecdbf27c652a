pub mod ai;
pub mod board;
pub mod engine;
pub mod error;
pub mod groups;
pub mod ko;
pub mod session;
pub mod stone;
pub mod turn;

/// On-board coordinate `(x, y)`, origin at the top-left corner.
pub type Point = (u8, u8);

pub use ai::Strategy;
pub use board::{Board, Cell, MAX_SIZE};
pub use engine::{DEFAULT_KOMI, Engine, MoveResult, Outcome, Scores};
pub use error::GoError;
pub use groups::{Group, GroupId, Groups};
pub use ko::Ko;
pub use session::SessionError;
pub use stone::Stone;
pub use turn::Move;
