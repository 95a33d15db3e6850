use std::collections::BTreeSet;

use super::*;

impl Board {
    /// Returns whether a pawn standing on `from` may move to `to`. The board does
    /// not need to hold a pawn on `from`.
    ///
    /// A pawn steps to a free neighbouring cell unless a wall is in the way. It may
    /// jump straight over a neighbouring pawn, and when that jump is blocked by a
    /// wall or the board edge it may instead hop diagonally around the pawn.
    pub fn can_move(&self, from: Position, to: Position) -> bool {
        if !is_cell_legal(to) || self.is_occupied(to) {
            return false;
        }
        // `from` is not range checked, so the deltas may not fit in an i8.
        let dx = i16::from(to.x) - i16::from(from.x);
        let dy = i16::from(to.y) - i16::from(from.y);
        match (dx.abs(), dy.abs()) {
            (1, 0) | (0, 1) => !self.wall_between(from, to),
            (2, 0) | (0, 2) => {
                let over = Position {
                    x: from.x + (dx / 2) as i8,
                    y: from.y + (dy / 2) as i8,
                };
                self.can_jump_straight(from, over, to)
            }
            (1, 1) => [
                Position { x: from.x, y: to.y },
                Position { x: to.x, y: from.y },
            ]
            .into_iter()
            .any(|over| self.can_jump_diagonally(from, over, to)),
            _ => false,
        }
    }

    fn can_jump_straight(&self, from: Position, over: Position, to: Position) -> bool {
        self.is_occupied(over) && !self.wall_between(from, over) && !self.wall_between(over, to)
    }

    // Only allowed when the straight jump over `over` is blocked.
    fn can_jump_diagonally(&self, from: Position, over: Position, to: Position) -> bool {
        let straight_landing = over + (over - from);
        self.is_occupied(over)
            && self.wall_between(over, straight_landing)
            && !self.wall_between(from, over)
            && !self.wall_between(over, to)
    }

    /// All cells a pawn on `from` can legally move to, in ascending order.
    pub fn possible_moves(&self, from: Position) -> Vec<Position> {
        let mut candidates = BTreeSet::new();
        for next in from.neighbours() {
            candidates.insert(next);
            if self.is_occupied(next) {
                candidates.extend(next.neighbours());
            }
        }
        candidates.remove(&from);
        candidates
            .into_iter()
            .filter(|to| self.can_move(from, *to))
            .collect()
    }
}
