use crate::core::entities::{Captures, Coords, StoneColor};
use crate::core::errors::MoveError;
use crate::core::helpers::to_notation;
use crate::gogame::board::Board;
use crate::gogame::resolver::{resolve, ResolvedMove};
use crate::gogame::suggestion::{MoveSuggestion, SuggestionRequest};
use log::{debug, info};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Fresh or reset game, nothing played yet (black moves first).
    Idle,
    AwaitingMove(StoneColor),
}

/// Independent copy of everything `undo` has to restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub turn: StoneColor,
    pub captures: Captures,
    pub last_move: Option<Coords>,
}

/// What the caller gets back from an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub coords: Coords,
    pub color: StoneColor,
    pub captured: u32,
}

/// A single game: live board, side to move, capture tallies and undo stack.
///
/// Whether `color` matches [`GoGame::turn`] is left to the caller so the
/// same session serves local two-player play and AI replies.
#[derive(Debug, Clone)]
pub struct GoGame {
    board: Board,
    turn: StoneColor,
    captures: Captures,
    last_move: Option<Coords>,
    history: Vec<GameSnapshot>,
}

impl GoGame {
    pub fn new(board_size: u8) -> Self {
        GoGame {
            board: Board::new(board_size),
            turn: StoneColor::Black,
            captures: Captures::default(),
            last_move: None,
            history: vec![],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> StoneColor {
        self.turn
    }

    pub fn captures(&self) -> Captures {
        self.captures
    }

    pub fn last_move(&self) -> Option<Coords> {
        self.last_move
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn state(&self) -> SessionState {
        if self.history.is_empty() && self.board.is_empty() {
            SessionState::Idle
        } else {
            SessionState::AwaitingMove(self.turn)
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            turn: self.turn,
            captures: self.captures,
            last_move: self.last_move,
        }
    }

    /// Plays `color` at `(x, y)`. On rejection nothing changes.
    pub fn submit_move(
        &mut self,
        x: u8,
        y: u8,
        color: StoneColor,
    ) -> Result<PlayedMove, MoveError> {
        let ResolvedMove { board, captured, .. } = resolve(&self.board, x, y, color)?;

        self.history.push(self.snapshot());
        self.board = board;
        self.captures.add(color, captured);
        self.turn = color.inverse();
        self.last_move = Some(Coords::from(x, y));

        info!(
            "{} played {}, captured {}",
            color.name(),
            to_notation(x, y, self.board.size()),
            captured
        );

        Ok(PlayedMove {
            coords: Coords::from(x, y),
            color,
            captured,
        })
    }

    /// Runs an externally suggested move through the same path as any other.
    pub fn submit_suggestion(
        &mut self,
        suggestion: &MoveSuggestion,
        color: StoneColor,
    ) -> Result<PlayedMove, MoveError> {
        debug!("suggested move rationale: {}", suggestion.rationale);

        match (u8::try_from(suggestion.x), u8::try_from(suggestion.y)) {
            (Ok(x), Ok(y)) => self.submit_move(x, y, color),
            _ => Err(MoveError::OutOfBounds),
        }
    }

    /// Restores the state before the last accepted move. With no history
    /// left this starts a fresh game of the same size.
    pub fn undo(&mut self) {
        match self.history.pop() {
            Some(snapshot) => {
                self.board = snapshot.board;
                self.turn = snapshot.turn;
                self.captures = snapshot.captures;
                self.last_move = snapshot.last_move;

                info!("undo, {} snapshots left", self.history.len());
            }
            None => self.reset(self.board.size()),
        }
    }

    pub fn reset(&mut self, board_size: u8) {
        *self = GoGame::new(board_size);

        info!("new game on {}x{}", board_size, board_size);
    }

    pub fn suggestion_request(&self) -> SuggestionRequest {
        SuggestionRequest::from_game(self)
    }
}
