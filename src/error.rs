use thiserror::Error;

use crate::board::{Position, Wall};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("moving {player} to position {target} is illegal")]
    IllegalMove { player: String, target: Position },
    #[error("adding {0} is illegal")]
    IllegalWallPlacement(Wall),
    #[error("player {0} was not found")]
    PlayerNotFound(String),
    #[error("tried to init game with too few players: {0}")]
    TooFewPlayers(usize),
    #[error("player name {0} is used more than once")]
    DuplicatePlayerName(String),
}
