use crate::board::*;
use crate::error::EngineError;

/// Runs a game of Quoridor: keeps the board and whose turn it is, and only lets
/// legal moves and walls through.
///
/// Every command validates first and mutates after, so a rejected command leaves
/// the engine untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoridorEngine {
    board: Board,
    current_player: usize,
}

impl QuoridorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(board: Board, first_player: usize) -> Self {
        Self {
            board,
            current_player: first_player,
        }
    }

    /// Seats the players on their starting positions, in the given order. With two
    /// or three names the first two play, with four or more the first four.
    pub fn init<S: AsRef<str>>(&mut self, player_names: &[S]) -> Result<(), EngineError> {
        let count = player_names.len();
        if count < 2 {
            return Err(EngineError::TooFewPlayers(count));
        }
        let seats = if count >= STARTING_POSITIONS.len() {
            STARTING_POSITIONS.len()
        } else {
            2
        };
        if count != seats {
            log::warn!("{count} players requested, only the first {seats} are seated");
        }

        let mut players: Vec<PlayerPiece> = Vec::with_capacity(seats);
        for (name, position) in player_names.iter().zip(STARTING_POSITIONS).take(seats) {
            let name = name.as_ref();
            if players.iter().any(|player| player.name == name) {
                return Err(EngineError::DuplicatePlayerName(name.to_string()));
            }
            players.push(PlayerPiece::new(position, name));
        }
        log::info!(
            "new game with {}",
            players
                .iter()
                .map(|player| player.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.board = Board::new(players);
        self.current_player = 0;
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[PlayerPiece] {
        &self.board.players
    }

    /// Replaces the whole board, e.g. with a snapshot received from elsewhere. The
    /// turn counter is kept.
    pub fn load_board(&mut self, board: Board) {
        log::debug!(
            "loading board with {} players and {} walls",
            board.players.len(),
            board.walls.len()
        );
        self.board = board;
    }

    pub fn player_position(&self, name: &str) -> Result<Position, EngineError> {
        self.board
            .find_player(name)
            .map(|player| player.position)
            .ok_or_else(|| EngineError::PlayerNotFound(name.to_string()))
    }

    pub fn move_player(&mut self, name: &str, target: Position) -> Result<(), EngineError> {
        let from = self.player_position(name)?;
        if !self.board.can_move(from, target) {
            log::debug!("rejected move of {name} from {from} to {target}");
            return Err(EngineError::IllegalMove {
                player: name.to_string(),
                target,
            });
        }
        self.board.set_player_position(name, target);
        log::debug!("{name} moved from {from} to {target}");
        if self.find_winner() == Some(name) {
            log::info!("{name} reached its goal");
        }
        Ok(())
    }

    /// Places a wall. Besides fitting on the board, the wall must leave every
    /// player a path to its goal.
    pub fn add_wall(&mut self, wall: Wall) -> Result<(), EngineError> {
        if !self.board.can_place_wall(wall) {
            log::debug!("rejected {wall}: slot taken or out of bounds");
            return Err(EngineError::IllegalWallPlacement(wall));
        }
        if self.board.would_wall_block_any_player(wall) {
            log::debug!("rejected {wall}: it cuts a player off");
            return Err(EngineError::IllegalWallPlacement(wall));
        }
        self.board.walls.place_wall(wall);
        log::debug!("placed {wall}");
        Ok(())
    }

    pub fn is_wall_possible(&self, wall: Wall) -> bool {
        self.board.can_place_wall(wall) && !self.board.would_wall_block_any_player(wall)
    }

    pub fn is_move_possible(&self, name: &str, target: Position) -> Result<bool, EngineError> {
        let from = self.player_position(name)?;
        Ok(self.board.can_move(from, target))
    }

    pub fn possible_moves(&self, name: &str) -> Result<Vec<Position>, EngineError> {
        let from = self.player_position(name)?;
        Ok(self.board.possible_moves(from))
    }

    pub fn is_game_over(&self) -> bool {
        self.find_winner().is_some()
    }

    /// The first player, in roster order, standing on one of its goal cells.
    pub fn find_winner(&self) -> Option<&str> {
        self.board
            .players
            .iter()
            .enumerate()
            .find(|(index, player)| goal_cells(*index).contains(&player.position))
            .map(|(_, player)| player.name.as_str())
    }

    /// Hook for whatever has to happen once a game has a winner. Nothing does yet:
    /// the board and the turn counter are left as they are, so callers can still
    /// inspect the final position.
    pub fn finish_game(&mut self) {
        log::debug!("game finished, winner: {:?}", self.find_winner());
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn advance_turn(&mut self) {
        let count = self.board.players.len();
        if count == 0 {
            return;
        }
        self.current_player = (self.current_player + 1) % count;
    }
}
