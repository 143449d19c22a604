use crate::core::entities::{Coords, StoneColor};
use crate::core::errors::MoveError;
use crate::core::helpers::to_notation;
use crate::gogame::board::Board;
use crate::gogame::group::analyze;
use log::debug;
use std::collections::BTreeSet;

/// Board after an accepted placement, all captures applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMove {
    pub board: Board,
    pub captured: u32,
    pub captured_stones: BTreeSet<Coords>,
}

pub type MoveOutcome = Result<ResolvedMove, MoveError>;

/// Places `color` at `(x, y)` on a copy of `board`, removes opponent groups
/// left without liberties, then refuses the move if the placed group has
/// none either. `board` itself is never modified.
///
/// There is no ko check: an immediate recapture is accepted.
pub fn resolve(board: &Board, x: u8, y: u8, color: StoneColor) -> MoveOutcome {
    let notation = to_notation(x, y, board.size());

    if !board.on_board(x, y) {
        debug!("{} {}: out of bounds", color.name(), notation);
        return Err(MoveError::OutOfBounds);
    }

    if !color.is_stone() {
        return Err(MoveError::InvalidGroupRoot);
    }

    if board.get(x, y)?.is_stone() {
        debug!("{} {}: occupied", color.name(), notation);
        return Err(MoveError::Occupied);
    }

    let placed = Coords::from(x, y);
    let mut candidate = board.with_stone(x, y, color)?;
    let mut captured_stones = BTreeSet::new();

    for neighbor in board.neighbors(placed) {
        // stones already removed through another neighbor are empty by now
        if candidate.stone_at(neighbor)? != color.inverse() {
            continue;
        }

        let group = analyze(&candidate, neighbor.x, neighbor.y)?;
        if group.is_dead() {
            for &stone in &group.stones {
                candidate.set(stone, StoneColor::Empty)?;
            }
            captured_stones.extend(group.stones);
        }
    }

    if analyze(&candidate, x, y)?.is_dead() {
        debug!("{} {}: suicide", color.name(), notation);
        return Err(MoveError::Suicide);
    }

    let captured = captured_stones.len() as u32;
    debug!("{} {}: accepted, {} captured", color.name(), notation, captured);

    Ok(ResolvedMove {
        board: candidate,
        captured,
        captured_stones,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(lines: &[&str]) -> Board {
        Board::parse(&lines.join("\n")).unwrap()
    }

    #[test]
    fn plain_placement_captures_nothing() {
        let board = Board::new(9);
        let resolved = resolve(&board, 4, 4, StoneColor::Black).unwrap();

        assert_eq!(0, resolved.captured);
        assert_eq!(Ok(StoneColor::Black), resolved.board.get(4, 4));
        assert!(board.is_empty());
    }

    #[test]
    fn rejects_out_of_bounds_and_occupied() {
        let board = Board::new(9).with_stone(2, 2, StoneColor::White).unwrap();
        let before = board.clone();

        for _ in 0..2 {
            assert_eq!(
                Err(MoveError::OutOfBounds),
                resolve(&board, 9, 2, StoneColor::Black)
            );
            assert_eq!(
                Err(MoveError::Occupied),
                resolve(&board, 2, 2, StoneColor::Black)
            );
            assert_eq!(
                Err(MoveError::Occupied),
                resolve(&board, 2, 2, StoneColor::White)
            );
        }
        assert_eq!(before, board);
    }

    #[test]
    fn empty_is_not_a_player_color() {
        assert_eq!(
            Err(MoveError::InvalidGroupRoot),
            resolve(&Board::new(9), 0, 0, StoneColor::Empty)
        );
    }

    #[test]
    fn rejection_is_repeatable_and_leaves_board_alone() {
        let board = board_from(&[
            "   A B C",
            " 3 . O . 3",
            " 2 O . O 2",
            " 1 . O . 1",
            "   A B C",
        ]);
        let before = board.clone();

        assert_eq!(Err(MoveError::Suicide), resolve(&board, 1, 1, StoneColor::Black));
        assert_eq!(Err(MoveError::Suicide), resolve(&board, 1, 1, StoneColor::Black));
        assert_eq!(before.serialize(), board.serialize());
    }

    #[test]
    fn surrounded_stone_is_captured_on_last_liberty() {
        let board = board_from(&[
            "   A B C",
            " 3 . O . 3",
            " 2 O X O 2",
            " 1 . . . 1",
            "   A B C",
        ]);

        let resolved = resolve(&board, 1, 2, StoneColor::White).unwrap();

        assert_eq!(1, resolved.captured);
        assert_eq!(Ok(StoneColor::Empty), resolved.board.get(1, 1));
        assert!(resolved.captured_stones.contains(&Coords::from(1, 1)));
    }

    #[test]
    fn corner_suicide_is_rejected() {
        let board = board_from(&[
            "   A B C",
            " 3 . O . 3",
            " 2 O . . 2",
            " 1 . . . 1",
            "   A B C",
        ]);

        assert_eq!(Err(MoveError::Suicide), resolve(&board, 0, 0, StoneColor::Black));
        assert!(resolve(&board, 0, 0, StoneColor::White).is_ok());
    }

    #[test]
    fn filling_own_last_eye_of_larger_group_is_suicide() {
        let board = board_from(&[
            "   A B C D",
            " 4 . X O . 4",
            " 3 X X O . 3",
            " 2 O O O . 2",
            " 1 . . . . 1",
            "   A B C D",
        ]);

        assert_eq!(Err(MoveError::Suicide), resolve(&board, 0, 0, StoneColor::Black));
    }

    #[test]
    fn capture_takes_precedence_over_suicide() {
        // black at A3 has no liberties of its own but removes the white stone
        let board = board_from(&[
            "   A B C",
            " 3 . O X 3",
            " 2 O X . 2",
            " 1 X . . 1",
            "   A B C",
        ]);

        let resolved = resolve(&board, 0, 0, StoneColor::Black).unwrap();

        assert_eq!(2, resolved.captured);
        assert_eq!(Ok(StoneColor::Empty), resolved.board.get(1, 0));
        assert_eq!(Ok(StoneColor::Empty), resolved.board.get(0, 1));
        assert_eq!(Ok(StoneColor::Black), resolved.board.get(0, 0));
    }

    #[test]
    fn multi_stone_group_is_captured_whole() {
        let board = board_from(&[
            "   A B C D E",
            " 5 . X X . . 5",
            " 4 X O O X . 4",
            " 3 . X . . . 3",
            " 2 . . . . . 2",
            " 1 . . . . . 1",
            "   A B C D E",
        ]);

        let resolved = resolve(&board, 2, 2, StoneColor::Black).unwrap();

        assert_eq!(2, resolved.captured);
        assert_eq!(Ok(StoneColor::Empty), resolved.board.get(1, 1));
        assert_eq!(Ok(StoneColor::Empty), resolved.board.get(2, 1));
    }

    #[test]
    fn one_stone_can_capture_two_separate_groups() {
        let board = board_from(&[
            "   A B C D E",
            " 5 X O . O X 5",
            " 4 . X . X . 4",
            " 3 . . . . . 3",
            " 2 . . . . . 2",
            " 1 . . . . . 1",
            "   A B C D E",
        ]);

        let resolved = resolve(&board, 2, 0, StoneColor::Black).unwrap();

        assert_eq!(2, resolved.captured);
        assert_eq!(Ok(StoneColor::Empty), resolved.board.get(1, 0));
        assert_eq!(Ok(StoneColor::Empty), resolved.board.get(3, 0));
    }

    #[test]
    fn same_group_touching_twice_is_counted_once() {
        // white group wraps around C4 and touches it from two sides
        let board = board_from(&[
            "   A B C D E",
            " 5 X O O O X 5",
            " 4 X O . O X 4",
            " 3 . X X X . 3",
            " 2 . . . . . 2",
            " 1 . . . . . 1",
            "   A B C D E",
        ]);

        let resolved = resolve(&board, 2, 1, StoneColor::Black).unwrap();

        assert_eq!(5, resolved.captured);
        assert_eq!(0, resolved.board.stone_count(StoneColor::White));
    }

    #[test]
    fn immediate_recapture_is_allowed() {
        let board = board_from(&[
            "   A B C D",
            " 4 . X O . 4",
            " 3 X . X O 3",
            " 2 . X O . 2",
            " 1 . . . . 1",
            "   A B C D",
        ]);

        let taken = resolve(&board, 1, 1, StoneColor::White).unwrap();
        assert_eq!(1, taken.captured);

        let retaken = resolve(&taken.board, 2, 1, StoneColor::Black).unwrap();
        assert_eq!(1, retaken.captured);
        assert_eq!(board, retaken.board);
    }
}
