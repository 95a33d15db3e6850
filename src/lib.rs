mod board;
mod engine;
mod error;
mod player;

pub use board::{
    goal_cells, is_cell_legal, is_wall_slot_legal, Board, PlayerPiece, Position, Wall,
    WallDirection, Walls, BOARD_SIZE, CELL_COUNT, STARTING_POSITIONS, STEPS, WALL_SLOTS,
};
pub use engine::QuoridorEngine;
pub use error::EngineError;
pub use player::PlayerEngine;
