use ahash::AHashSet;

use super::*;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WallDirection {
    Horizontal,
    Vertical,
}

impl WallDirection {
    pub fn orthogonal(&self) -> Self {
        match self {
            WallDirection::Horizontal => WallDirection::Vertical,
            WallDirection::Vertical => WallDirection::Horizontal,
        }
    }
}

/// A wall anchored at a slot. The slot `(x, y)` is the intersection shared by the
/// cells `(x, y)`, `(x + 1, y)`, `(x, y + 1)` and `(x + 1, y + 1)`: a vertical wall
/// splits columns `x` and `x + 1` over rows `y` and `y + 1`, a horizontal wall
/// splits rows `y` and `y + 1` over columns `x` and `x + 1`.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Wall {
    pub position: Position,
    pub direction: WallDirection,
}

impl Wall {
    pub fn new(position: Position, vertical: bool) -> Self {
        let direction = if vertical {
            WallDirection::Vertical
        } else {
            WallDirection::Horizontal
        };
        Self {
            position,
            direction,
        }
    }

    pub fn vertical(position: Position) -> Self {
        Self::new(position, true)
    }

    pub fn horizontal(position: Position) -> Self {
        Self::new(position, false)
    }

    /// The wall of the other orientation anchored at the same slot.
    pub fn crossing(&self) -> Self {
        Self {
            position: self.position,
            direction: self.direction.orthogonal(),
        }
    }

    /// Same-orientation walls one slot away along this wall's own axis. Both
    /// would overlap this wall by half its length.
    pub fn collinear_neighbours(&self) -> [Wall; 2] {
        let step = match self.direction {
            WallDirection::Vertical => Position { x: 0, y: 1 },
            WallDirection::Horizontal => Position { x: 1, y: 0 },
        };
        [
            Wall {
                position: self.position - step,
                direction: self.direction,
            },
            Wall {
                position: self.position + step,
                direction: self.direction,
            },
        ]
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let direction = match self.direction {
            WallDirection::Horizontal => "horizontal",
            WallDirection::Vertical => "vertical",
        };
        write!(f, "{} wall at {}", direction, self.position)
    }
}

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walls(AHashSet<Wall>);

impl Walls {
    pub fn contains(&self, wall: &Wall) -> bool {
        self.0.contains(wall)
    }

    // places a wall on the board, returns false if it was already there.
    pub fn place_wall(&mut self, wall: Wall) -> bool {
        self.0.insert(wall)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wall> {
        self.0.iter()
    }
}

impl FromIterator<Wall> for Walls {
    fn from_iter<I: IntoIterator<Item = Wall>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// The two wall slots that could separate the adjacent cells `a` and `b`. Walls
// have length 2, so a wall anchored one slot before the lower cell covers the
// edge as well. Candidates may fall outside the legal slot range.
fn separating_walls(a: Position, b: Position) -> [Wall; 2] {
    let low = Position {
        x: a.x.min(b.x),
        y: a.y.min(b.y),
    };
    if a.y == b.y {
        [
            Wall::vertical(low),
            Wall::vertical(low - Position { x: 0, y: 1 }),
        ]
    } else {
        [
            Wall::horizontal(low),
            Wall::horizontal(low - Position { x: 1, y: 0 }),
        ]
    }
}

impl Board {
    /// Returns whether a placed wall, or the edge of the board, lies between
    /// the adjacent cells `a` and `b`.
    pub fn wall_between(&self, a: Position, b: Position) -> bool {
        debug_assert_eq!(a.manhattan_distance(b), 1, "{a} and {b} are not adjacent");
        if !is_cell_legal(a) || !is_cell_legal(b) {
            return true;
        }
        separating_walls(a, b)
            .iter()
            .any(|wall| self.walls.contains(wall))
    }

    /// Returns whether `wall`, placed or not, separates the adjacent cells `a` and
    /// `b`. The walls on the board are not consulted.
    pub fn would_wall_be_between(a: Position, b: Position, wall: Wall) -> bool {
        debug_assert_eq!(a.manhattan_distance(b), 1, "{a} and {b} are not adjacent");
        if !is_cell_legal(a) || !is_cell_legal(b) || !is_wall_slot_legal(wall.position) {
            return false;
        }
        separating_walls(a, b).contains(&wall)
    }

    /// Checks the physical placement of a wall: slot bounds, and no overlap or
    /// crossing with walls already on the board. Whether the wall cuts a player
    /// off is checked separately by [`Board::would_wall_block_any_player`].
    pub fn can_place_wall(&self, wall: Wall) -> bool {
        if !is_wall_slot_legal(wall.position) {
            return false;
        }
        !self.walls.contains(&wall)
            && !self.walls.contains(&wall.crossing())
            && !wall
                .collinear_neighbours()
                .iter()
                .any(|neighbour| self.walls.contains(neighbour))
    }

    pub fn place_wall(&mut self, wall: Wall) -> bool {
        if !self.can_place_wall(wall) {
            return false;
        }
        self.walls.place_wall(wall)
    }
}
