mod moves;
mod paths;
mod walls;

use serde::{Deserialize, Serialize};

pub use paths::{goal_cells, STARTING_POSITIONS};
pub use walls::*;

pub const BOARD_SIZE: i8 = 9;
pub const WALL_SLOTS: i8 = BOARD_SIZE - 1;
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

const LEFT: Position = Position { x: -1, y: 0 };
const RIGHT: Position = Position { x: 1, y: 0 };
const UP: Position = Position { x: 0, y: -1 };
const DOWN: Position = Position { x: 0, y: 1 };

/// The four axis-aligned steps a pawn can take.
pub const STEPS: [Position; 4] = [LEFT, RIGHT, UP, DOWN];

/// A cell or a wall slot on the grid. Which of the two depends on context, the
/// coordinates may also sit just outside the board as an intermediate result.
/// Arithmetic wraps, the results are always bounds checked before use.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub fn manhattan_distance(&self, other: Position) -> i16 {
        (i16::from(other.x) - i16::from(self.x)).abs()
            + (i16::from(other.y) - i16::from(self.y)).abs()
    }

    pub fn neighbours(&self) -> [Position; 4] {
        STEPS.map(|step| *self + step)
    }

    // Index of a legal cell in a row-major 9x9 layout.
    fn cell_index(&self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }
}

impl std::ops::Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Self::Output {
        Position {
            x: self.x.wrapping_add(rhs.x),
            y: self.y.wrapping_add(rhs.y),
        }
    }
}

impl std::ops::Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Self::Output {
        Position {
            x: self.x.wrapping_sub(rhs.x),
            y: self.y.wrapping_sub(rhs.y),
        }
    }
}

impl From<(i8, i8)> for Position {
    fn from((x, y): (i8, i8)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Returns whether `pos` is one of the 81 cells of the board.
pub fn is_cell_legal(pos: Position) -> bool {
    (0..BOARD_SIZE).contains(&pos.x) && (0..BOARD_SIZE).contains(&pos.y)
}

/// Returns whether `pos` is one of the 64 slots a wall can be anchored at.
pub fn is_wall_slot_legal(pos: Position) -> bool {
    (0..WALL_SLOTS).contains(&pos.x) && (0..WALL_SLOTS).contains(&pos.y)
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPiece {
    pub position: Position,
    pub name: String,
}

impl PlayerPiece {
    pub fn new(position: Position, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }
}

/// Pawns in turn order plus every wall on the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub players: Vec<PlayerPiece>,
    pub walls: Walls,
}

impl Board {
    pub fn new(players: Vec<PlayerPiece>) -> Self {
        Self {
            players,
            walls: Walls::default(),
        }
    }

    // Returns which pawn stands on a cell, if any.
    pub fn is_pawn(&self, pos: Position) -> Option<usize> {
        self.players.iter().position(|player| player.position == pos)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.is_pawn(pos).is_some()
    }

    pub fn find_player(&self, name: &str) -> Option<&PlayerPiece> {
        self.players.iter().find(|player| player.name == name)
    }

    fn find_player_mut(&mut self, name: &str) -> Option<&mut PlayerPiece> {
        self.players.iter_mut().find(|player| player.name == name)
    }

    /// Moves the named pawn without any rule check. Returns false if there is
    /// no such pawn.
    pub(crate) fn set_player_position(&mut self, name: &str, position: Position) -> bool {
        match self.find_player_mut(name) {
            Some(player) => {
                player.position = position;
                true
            }
            None => false,
        }
    }
}
