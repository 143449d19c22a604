use crate::core::entities::{Coords, StoneColor};
use crate::core::errors::{AppError, MoveError};
use crate::core::helpers::{get_column_name, MAX_BOARD_SIZE};

/// Square grid of intersections.
///
/// Treated as a value: [`Board::with_stone`] returns a modified copy, so a
/// board kept in history never changes underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    board_size: u8,
    cells: Vec<StoneColor>,
}

impl Board {
    pub fn new(board_size: u8) -> Self {
        Board {
            board_size,
            cells: vec![StoneColor::Empty; board_size as usize * board_size as usize],
        }
    }

    pub fn size(&self) -> u8 {
        self.board_size
    }

    pub fn on_board(&self, x: u8, y: u8) -> bool {
        x < self.board_size && y < self.board_size
    }

    pub fn get(&self, x: u8, y: u8) -> Result<StoneColor, MoveError> {
        if !self.on_board(x, y) {
            return Err(MoveError::OutOfBounds);
        }

        Ok(self.cells[Coords::from(x, y).index(self.board_size)])
    }

    pub fn stone_at(&self, coords: Coords) -> Result<StoneColor, MoveError> {
        self.get(coords.x, coords.y)
    }

    pub fn with_stone(&self, x: u8, y: u8, color: StoneColor) -> Result<Board, MoveError> {
        let mut board = self.clone();
        board.set(Coords::from(x, y), color)?;

        Ok(board)
    }

    pub(crate) fn set(&mut self, coords: Coords, color: StoneColor) -> Result<(), MoveError> {
        if !self.on_board(coords.x, coords.y) {
            return Err(MoveError::OutOfBounds);
        }

        let index = coords.index(self.board_size);
        self.cells[index] = color;

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_stone())
    }

    pub fn stone_count(&self, color: StoneColor) -> usize {
        self.cells.iter().filter(|&&cell| cell == color).count()
    }

    /// On-board orthogonal neighbors, in up/left/right/down order.
    pub fn neighbors(&self, coords: Coords) -> Vec<Coords> {
        let Coords { x, y } = coords;
        let mut result = Vec::with_capacity(4);

        if y > 0 {
            result.push(Coords::from(x, y - 1));
        }
        if x > 0 {
            result.push(Coords::from(x - 1, y));
        }
        if x + 1 < self.board_size {
            result.push(Coords::from(x + 1, y));
        }
        if y + 1 < self.board_size {
            result.push(Coords::from(x, y + 1));
        }

        result
    }

    /// Every intersection with its color, row by row from the top.
    pub fn intersections(&self) -> impl Iterator<Item = (Coords, StoneColor)> + '_ {
        let board_size = self.board_size as usize;

        self.cells.iter().enumerate().map(move |(index, &color)| {
            (
                Coords::from((index % board_size) as u8, (index / board_size) as u8),
                color,
            )
        })
    }

    /// Rows of colors, top row first, for renderers.
    pub fn matrix(&self) -> Vec<Vec<StoneColor>> {
        self.cells
            .chunks(self.board_size.max(1) as usize)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Text grid with coordinate labels: `X` black, `O` white, `.` empty.
    pub fn serialize(&self) -> String {
        let header = self.header_line();
        let mut text = String::with_capacity((header.len() + 1) * (self.board_size as usize + 2));

        text.push_str(&header);
        text.push('\n');

        for (y, row) in self.matrix().iter().enumerate() {
            let line_number = self.board_size as usize - y;
            let cells: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();

            text.push_str(&format!(
                "{: >2} {} {}\n",
                line_number,
                cells.join(" "),
                line_number
            ));
        }

        text.push_str(&header);
        text.push('\n');

        text
    }

    /// Reads back the output of [`Board::serialize`].
    pub fn parse(text: &str) -> Result<Board, AppError> {
        let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();

        if lines.len() < 3 {
            return Err(AppError::new(format!(
                "board text needs a header, rows and a footer, got {} lines",
                lines.len()
            )));
        }

        let board_size = lines.len() - 2;
        if board_size > MAX_BOARD_SIZE as usize {
            return Err(AppError::new(format!(
                "board text has {} rows, at most {} are supported",
                board_size, MAX_BOARD_SIZE
            )));
        }

        let mut board = Board::new(board_size as u8);
        let header = board.header_line();

        for edge in [lines[0], lines[lines.len() - 1]] {
            if edge.trim() != header.trim() {
                return Err(AppError::new(format!("unexpected column labels '{}'", edge)));
            }
        }

        for (y, line) in lines[1..=board_size].iter().enumerate() {
            let line_number = (board_size - y).to_string();
            let tokens: Vec<&str> = line.split_whitespace().collect();

            if tokens.len() != board_size + 2
                || tokens[0] != line_number
                || tokens[board_size + 1] != line_number
            {
                return Err(AppError::new(format!("malformed board row '{}'", line)));
            }

            for (x, token) in tokens[1..=board_size].iter().enumerate() {
                let mut symbol = token.chars();
                let color = match (symbol.next(), symbol.next()) {
                    (Some(c), None) => StoneColor::from_symbol(c),
                    _ => None,
                }
                .ok_or_else(|| {
                    AppError::new(format!("unknown intersection '{}' in row '{}'", token, line))
                })?;

                board.set(Coords::from(x as u8, y as u8), color)?;
            }
        }

        Ok(board)
    }

    fn header_line(&self) -> String {
        let labels: Vec<String> = (0..self.board_size)
            .map(|col| get_column_name(col).to_string())
            .collect();

        format!("   {}", labels.join(" "))
    }
}
