use crate::board::{Board, Position, Wall};
use crate::engine::QuoridorEngine;
use crate::error::EngineError;

/// The engine as a player sees it: it can ask what is legal and pull in the
/// latest board, but it cannot move pawns or place walls itself.
#[derive(Debug, Clone, Default)]
pub struct PlayerEngine {
    engine: QuoridorEngine,
}

impl PlayerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn possible_moves(&self, name: &str) -> Result<Vec<Position>, EngineError> {
        self.engine.possible_moves(name)
    }

    pub fn is_move_possible(&self, name: &str, target: Position) -> Result<bool, EngineError> {
        self.engine.is_move_possible(name, target)
    }

    pub fn is_wall_possible(&self, wall: Wall) -> bool {
        self.engine.is_wall_possible(wall)
    }

    pub fn update_board(&mut self, board: Board) {
        self.engine.load_board(board);
    }
}

impl From<QuoridorEngine> for PlayerEngine {
    fn from(engine: QuoridorEngine) -> Self {
        Self { engine }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_follows_the_game_board() {
        let mut game = QuoridorEngine::new();
        game.init(&["A", "B"]).unwrap();
        let mut view = PlayerEngine::new();
        assert_eq!(
            view.possible_moves("A"),
            Err(EngineError::PlayerNotFound("A".to_string()))
        );

        view.update_board(game.board().clone());
        assert_eq!(view.is_move_possible("A", (1, 4).into()), Ok(true));

        game.move_player("A", (1, 4).into()).unwrap();
        game.add_wall(Wall::vertical((1, 3).into())).unwrap();
        view.update_board(game.board().clone());

        assert_eq!(view.is_move_possible("A", (2, 4).into()), Ok(false));
        assert_eq!(
            view.possible_moves("A"),
            Ok(vec![(0, 4).into(), (1, 3).into(), (1, 5).into()])
        );
        assert!(!view.is_wall_possible(Wall::vertical((1, 4).into())));
        assert!(view.is_wall_possible(Wall::vertical((1, 5).into())));
    }

    #[test]
    fn test_from_engine() {
        let mut game = QuoridorEngine::new();
        game.init(&["A", "B", "C", "D"]).unwrap();
        let view = PlayerEngine::from(game);
        assert_eq!(
            view.possible_moves("C"),
            Ok(vec![(3, 0).into(), (4, 1).into(), (5, 0).into()])
        );
    }
}
