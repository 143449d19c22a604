use crate::core::entities::{Captures, StoneColor};
use crate::core::errors::AppError;
use crate::gogame::gogame::GoGame;
use serde::{Deserialize, Serialize};

/// What a move-suggestion service is told about the position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionRequest {
    pub board_size: u8,
    pub to_move: StoneColor,
    pub captures: Captures,
    /// `Board::serialize` output.
    pub board: String,
}

impl SuggestionRequest {
    pub fn from_game(game: &GoGame) -> Self {
        SuggestionRequest {
            board_size: game.board().size(),
            to_move: game.turn(),
            captures: game.captures(),
            board: game.board().serialize(),
        }
    }

    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(self).map_err(|e| AppError {
            message: format!("Error encoding suggestion request: {}", &e.to_string()),
        })
    }
}

/// A candidate move as returned by the suggestion service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveSuggestion {
    pub x: i64,
    pub y: i64,
    #[serde(default)]
    pub rationale: String,
}

impl MoveSuggestion {
    /// Accepts YAML or JSON text. Only the shape is checked here, legality
    /// is decided by the resolver like for any other move.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(text).map_err(|e| AppError {
            message: format!("Can't parse move suggestion '{}': {}", text, &e.to_string()),
        })
    }
}
