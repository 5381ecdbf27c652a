use serde::Serialize;

use crate::Point;
use crate::board::{Board, Cell};
use crate::stone::Stone;

/// Group identifier. Assigned from 1 in row-major scan order.
pub type GroupId = u32;

/// A maximal set of orthogonally connected stones of one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub color: Stone,
    /// Member stones, row-major.
    pub stones: Vec<Point>,
    /// Distinct vacant neighbors of the group, row-major.
    pub liberties: Vec<Point>,
}

/// Partition of a board into groups, with per-group liberties.
///
/// Recomputed from scratch by [`Groups::compute`]; nothing is cached
/// between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups {
    size: u8,
    ids: Vec<GroupId>,
    groups: Vec<Group>,
}

impl Groups {
    pub fn compute(board: &Board) -> Self {
        let size = board.size();
        let cells = board.cells();
        let mut ids: Vec<GroupId> = vec![0; cells.len()];
        // Last group that counted a point as liberty, for de-duplication.
        let mut counted: Vec<GroupId> = vec![0; cells.len()];
        let mut groups = Vec::new();

        for start in 0..cells.len() {
            if ids[start] != 0 {
                continue;
            }
            let Some(color) = cells[start].stone() else {
                continue;
            };

            let id = groups.len() as GroupId + 1;
            let mut stones = Vec::new();
            let mut liberties = Vec::new();
            let mut stack = vec![board.point(start)];
            ids[start] = id;

            while let Some(p) = stack.pop() {
                stones.push(p);
                for n in board.neighbors(p) {
                    let ni = idx(size, n);
                    match cells[ni] {
                        Cell::Stone(s) if s == color => {
                            if ids[ni] == 0 {
                                ids[ni] = id;
                                stack.push(n);
                            }
                        }
                        Cell::Stone(_) => {}
                        Cell::Empty | Cell::KoRestricted(_) => {
                            if counted[ni] != id {
                                counted[ni] = id;
                                liberties.push(n);
                            }
                        }
                    }
                }
            }

            stones.sort_unstable_by_key(|&(x, y)| (y, x));
            liberties.sort_unstable_by_key(|&(x, y)| (y, x));
            groups.push(Group {
                color,
                stones,
                liberties,
            });
        }

        Groups { size, ids, groups }
    }

    // -- Queries --

    /// Group of the stone at `(x, y)`; `None` for vacant or off-board points.
    pub fn group_of(&self, x: i32, y: i32) -> Option<GroupId> {
        let size = self.size as i32;
        if !(0..size).contains(&x) || !(0..size).contains(&y) {
            return None;
        }
        match self.ids[y as usize * self.size as usize + x as usize] {
            0 => None,
            id => Some(id),
        }
    }

    /// Liberty count of the group at `(x, y)`; 0 for vacant or off-board points.
    pub fn liberties(&self, x: i32, y: i32) -> usize {
        self.group_of(x, y)
            .and_then(|id| self.group(id))
            .map_or(0, |g| g.liberties.len())
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        let i = (id as usize).checked_sub(1)?;
        self.groups.get(i)
    }

    pub fn group_liberties(&self, id: GroupId) -> usize {
        self.group(id).map_or(0, |g| g.liberties.len())
    }

    /// Member stones of group `id`, row-major; empty for an unknown id.
    pub fn stones(&self, id: GroupId) -> Vec<Point> {
        self.group(id).map(|g| g.stones.clone()).unwrap_or_default()
    }

    pub fn color(&self, id: GroupId) -> Option<Stone> {
        self.group(id).map(|g| g.color)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &Group)> {
        self.groups
            .iter()
            .enumerate()
            .map(|(i, g)| (i as GroupId + 1, g))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups of `color` left without liberties.
    pub fn dead(&self, color: Stone) -> impl Iterator<Item = &Group> {
        self.groups
            .iter()
            .filter(move |g| g.color == color && g.liberties.is_empty())
    }

    /// Sum of liberty counts over every group of `color`.
    pub fn liberty_total(&self, color: Stone) -> usize {
        self.groups
            .iter()
            .filter(|g| g.color == color)
            .map(|g| g.liberties.len())
            .sum()
    }
}

#[inline]
fn idx(size: u8, (x, y): Point) -> usize {
    y as usize * size as usize + x as usize
}
