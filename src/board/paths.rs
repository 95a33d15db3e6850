use ahash::AHashSet;
use arraydeque::ArrayDeque;
use bitvec::prelude::*;

use super::*;

/// Where each seat starts, indexed by roster position. The first two seats face
/// each other across the x axis, the other two across the y axis.
pub const STARTING_POSITIONS: [Position; 4] = [
    Position { x: 0, y: 4 },
    Position { x: 8, y: 4 },
    Position { x: 4, y: 0 },
    Position { x: 4, y: 8 },
];

/// The cells the player seated at `player_index` has to reach to win: the edge of
/// the board opposite to its starting position. Empty for an unknown seat.
pub fn goal_cells(player_index: usize) -> AHashSet<Position> {
    let Some(start) = STARTING_POSITIONS.get(player_index) else {
        return AHashSet::new();
    };
    let last = BOARD_SIZE - 1;
    let starts_on_side_column = start.x == 0 || start.x == last;
    (0..BOARD_SIZE)
        .map(|i| {
            if starts_on_side_column {
                Position {
                    x: last - start.x,
                    y: i,
                }
            } else {
                Position {
                    x: i,
                    y: last - start.y,
                }
            }
        })
        .collect()
}

impl Board {
    /// Returns whether placing `wall` would leave some player without any route to
    /// its goal cells. The wall is not placed and need not be placeable; only the
    /// paths are checked.
    pub fn would_wall_block_any_player(&self, wall: Wall) -> bool {
        self.any_player_blocked(Some(wall))
    }

    pub fn every_player_has_path(&self) -> bool {
        !self.any_player_blocked(None)
    }

    fn any_player_blocked(&self, extra_wall: Option<Wall>) -> bool {
        self.players.iter().enumerate().any(|(index, player)| {
            let goals = goal_cells(index);
            // Seats without a goal row only exist in hand built boards.
            if goals.is_empty() {
                return false;
            }
            let blocked = !self.reaches_goal(player.position, &goals, extra_wall);
            if blocked {
                log::trace!("{} at {} has no path to its goal", player.name, player.position);
            }
            blocked
        })
    }

    fn is_passage_open(&self, from: Position, to: Position, extra_wall: Option<Wall>) -> bool {
        !self.wall_between(from, to)
            && !extra_wall.is_some_and(|wall| Board::would_wall_be_between(from, to, wall))
    }

    // Grows the reachable area one layer at a time until it touches a goal cell or
    // stops growing. Pawns do not obstruct paths, only walls do.
    fn reaches_goal(
        &self,
        start: Position,
        goals: &AHashSet<Position>,
        extra_wall: Option<Wall>,
    ) -> bool {
        if goals.contains(&start) {
            return true;
        }
        if !is_cell_legal(start) {
            return false;
        }
        let mut visited: BitArr!(for CELL_COUNT) = BitArray::ZERO;
        visited.set(start.cell_index(), true);
        let mut frontier: ArrayDeque<Position, CELL_COUNT> = ArrayDeque::new();
        let _ = frontier.push_back(start);
        loop {
            let mut next_frontier: ArrayDeque<Position, CELL_COUNT> = ArrayDeque::new();
            for &current in frontier.iter() {
                for next in current.neighbours() {
                    if !self.is_passage_open(current, next, extra_wall) {
                        continue;
                    }
                    if visited.replace(next.cell_index(), true) {
                        continue;
                    }
                    if goals.contains(&next) {
                        return true;
                    }
                    // Each cell is visited once, so a frontier never outgrows the board.
                    let _ = next_frontier.push_back(next);
                }
            }
            if next_frontier.is_empty() {
                return false;
            }
            frontier = next_frontier;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn seated(count: usize) -> Board {
        Board::new(
            STARTING_POSITIONS[..count]
                .iter()
                .enumerate()
                .map(|(i, pos)| PlayerPiece::new(*pos, format!("P{i}")))
                .collect(),
        )
    }

    // A ledge of horizontal walls across the board between rows 3 and 4, with a
    // pocket around (8, 4). Only `h(7, 4)` is missing to seal the top part.
    fn ledge_walls() -> Vec<Wall> {
        vec![
            Wall::horizontal((0, 3).into()),
            Wall::horizontal((2, 3).into()),
            Wall::horizontal((4, 3).into()),
            Wall::horizontal((6, 3).into()),
            Wall::vertical((7, 3).into()),
        ]
    }

    #[test]
    fn test_goal_cells() {
        let expected: [fn(i8) -> Position; 4] = [
            |i| (8, i).into(),
            |i| (0, i).into(),
            |i| (i, 8).into(),
            |i| (i, 0).into(),
        ];
        for (index, cell) in expected.iter().enumerate() {
            let goals = goal_cells(index);
            assert_eq!(goals.len(), 9);
            for i in 0..9 {
                assert!(goals.contains(&cell(i)), "seat {index} cell {i}");
            }
        }
        assert!(goal_cells(4).is_empty());
        assert!(goal_cells(usize::MAX).is_empty());
    }

    #[test]
    fn test_no_wall_blocks_on_empty_board() {
        for count in [2, 4] {
            let board = seated(count);
            assert!(board.every_player_has_path());
            for x in 0..8 {
                for y in 0..8 {
                    assert!(!board.would_wall_block_any_player(Wall::vertical((x, y).into())));
                    assert!(!board.would_wall_block_any_player(Wall::horizontal((x, y).into())));
                }
            }
        }
    }

    #[test]
    fn test_wall_closing_a_corner() {
        let mut board = seated(2);
        board.players[0].position = (0, 0).into();
        board.walls.place_wall(Wall::vertical((0, 0).into()));

        assert!(board.would_wall_block_any_player(Wall::horizontal((0, 1).into())));
        assert!(!board.would_wall_block_any_player(Wall::horizontal((1, 1).into())));
        assert!(board.every_player_has_path());
    }

    #[test]
    fn test_enclosed_player_on_goal_is_not_blocked() {
        let mut board = seated(2);
        board.players[0].position = (8, 0).into();
        board.walls.place_wall(Wall::vertical((7, 0).into()));

        assert!(!board.would_wall_block_any_player(Wall::horizontal((7, 1).into())));
    }

    #[test]
    fn test_blocking_depends_on_goal() {
        let mut two = seated(2);
        let mut four = seated(4);
        for wall in ledge_walls() {
            assert!(two.place_wall(wall));
            assert!(four.place_wall(wall));
        }
        let last = Wall::horizontal((7, 4).into());

        // the seats on the x axis still walk around the ledge
        assert!(!two.would_wall_block_any_player(last));
        // the seats on the y axis have to cross it
        assert!(!four.would_wall_block_any_player(Wall::horizontal((0, 6).into())));
        assert!(four.would_wall_block_any_player(last));
        assert!(four.every_player_has_path());
    }

    #[test]
    fn test_hypothetical_wall_is_not_placed() {
        let board = seated(2);
        let _ = board.would_wall_block_any_player(Wall::vertical((3, 3).into()));
        assert!(board.walls.is_empty());
    }

    #[test]
    fn test_pawns_do_not_block_paths() {
        let mut board = seated(2);
        board.players[0].position = (0, 0).into();
        board.players[1].position = (1, 0).into();
        board.walls.place_wall(Wall::horizontal((0, 0).into()));

        // (0, 0) can only leave through (1, 0), where the other pawn stands
        assert!(board.every_player_has_path());
    }
}
