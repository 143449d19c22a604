use crate::core::entities::{Coords, StoneColor};
use crate::core::errors::MoveError;
use crate::gogame::board::Board;
use std::collections::{BTreeSet, VecDeque};

/// Connected stones of one color together with their distinct liberties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub color: StoneColor,
    pub stones: BTreeSet<Coords>,
    pub liberties: BTreeSet<Coords>,
}

impl Group {
    pub fn size(&self) -> usize {
        self.stones.len()
    }

    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }
}

/// Flood fills the group containing `(x, y)`.
///
/// Uses an explicit queue, so a group spanning a whole 19x19 board does not
/// grow the call stack.
pub fn analyze(board: &Board, x: u8, y: u8) -> Result<Group, MoveError> {
    let color = board.get(x, y)?;
    if !color.is_stone() {
        return Err(MoveError::InvalidGroupRoot);
    }

    let root = Coords::from(x, y);
    let mut stones = BTreeSet::new();
    let mut liberties = BTreeSet::new();
    let mut queue = VecDeque::new();

    stones.insert(root);
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        for neighbor in board.neighbors(current) {
            match board.stone_at(neighbor)? {
                StoneColor::Empty => {
                    liberties.insert(neighbor);
                }
                c if c == color => {
                    if stones.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
                _ => {}
            }
        }
    }

    Ok(Group {
        color,
        stones,
        liberties,
    })
}
