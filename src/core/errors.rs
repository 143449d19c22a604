use std::fmt;

pub struct AppError {
    pub message: String,
}

impl AppError {
    pub fn new(message: impl Into<String>) -> Self {
        AppError {
            message: message.into(),
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError {
            message: format!("I/O error: {}", e),
        }
    }
}

impl From<MoveError> for AppError {
    fn from(e: MoveError) -> Self {
        AppError {
            message: format!("move rejected: {}", e),
        }
    }
}

/// Why a placement (or a group lookup) was refused.
///
/// Every variant is recoverable: the board it was computed against is
/// left untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    Occupied,
    Suicide,
    /// Group analysis was asked to start from an empty intersection.
    InvalidGroupRoot,
}

impl MoveError {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::OutOfBounds => "out of bounds",
            Self::Occupied => "occupied",
            Self::Suicide => "suicide",
            Self::InvalidGroupRoot => "invalid group root",
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl std::error::Error for MoveError {}
