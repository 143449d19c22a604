use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoneColor {
    Empty,
    Black,
    White,
}

impl Default for StoneColor {
    fn default() -> Self {
        Self::Empty
    }
}

impl StoneColor {
    pub fn name(&self) -> &str {
        match self {
            Self::Empty => "empty",
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// The opposing player. `Empty` has no opponent and maps to itself.
    pub fn inverse(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub fn is_stone(&self) -> bool {
        *self != Self::Empty
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Empty => '.',
            Self::Black => 'X',
            Self::White => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Empty),
            'X' => Some(Self::Black),
            'O' => Some(Self::White),
            _ => None,
        }
    }
}

/// Zero-indexed intersection: `x` is the column (left to right), `y` the
/// row (top to bottom).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coords {
    pub x: u8,
    pub y: u8,
}

impl Coords {
    pub fn from(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub fn index(&self, board_size: u8) -> usize {
        self.y as usize * board_size as usize + self.x as usize
    }
}

/// Opponent stones removed over a game, per capturing color.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn get(&self, color: StoneColor) -> u32 {
        match color {
            StoneColor::Black => self.black,
            StoneColor::White => self.white,
            StoneColor::Empty => 0,
        }
    }

    pub fn add(&mut self, color: StoneColor, count: u32) {
        match color {
            StoneColor::Black => self.black += count,
            StoneColor::White => self.white += count,
            StoneColor::Empty => {}
        }
    }
}
