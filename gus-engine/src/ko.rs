use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

/// Simplified ko: one vacated point the captured color may not replay on its next move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub pos: Point,
    pub illegal: Stone,
}

impl Ko {
    /// Restriction left behind by a capture pass. Only single-stone captures restrict.
    pub fn after_capture(captured: &[Point], captured_color: Stone) -> Option<Ko> {
        match captured {
            [pos] => Some(Ko {
                pos: *pos,
                illegal: captured_color,
            }),
            _ => None,
        }
    }
}
