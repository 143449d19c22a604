use crate::core::config::{validate_board_size, AppConfig};
use crate::core::errors::{AppError, MoveError};
use crate::core::helpers::{parse_notation, to_notation};
use crate::gogame::gogame::{GoGame, PlayedMove};
use crate::gogame::suggestion::MoveSuggestion;
use log::{info, warn};
use std::io::{BufRead, Write};

const HELP: &str =
    "commands: play <vertex> | undo | new [size] | show | request | suggest <yaml> | quit";

#[derive(Debug, PartialEq)]
enum ConsoleCommand {
    Play(String),
    Undo,
    New(Option<String>),
    Show,
    Request,
    Suggest(String),
    Quit,
    Unknown(String),
}

#[derive(Debug, PartialEq)]
pub enum ConsoleSideEffect {
    None,
    Quit,
}

fn parse_command(line: &str) -> ConsoleCommand {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "play" if !rest.is_empty() => ConsoleCommand::Play(rest.to_string()),
        "undo" => ConsoleCommand::Undo,
        "new" if rest.is_empty() => ConsoleCommand::New(None),
        "new" => ConsoleCommand::New(Some(rest.to_string())),
        "show" => ConsoleCommand::Show,
        "request" => ConsoleCommand::Request,
        "suggest" if !rest.is_empty() => ConsoleCommand::Suggest(rest.to_string()),
        "quit" | "exit" => ConsoleCommand::Quit,
        _ => ConsoleCommand::Unknown(line.to_string()),
    }
}

/// Line-oriented front end. Enforces turn order, which the engine leaves to
/// its callers.
pub struct Console {
    game: GoGame,
    undo_steps: u8,
}

impl Console {
    pub fn new(board_size: u8, undo_steps: u8) -> Self {
        Console {
            game: GoGame::new(board_size),
            undo_steps,
        }
    }

    pub fn from_config(app_config: &AppConfig) -> Self {
        Console::new(
            app_config.general.board_size,
            app_config.general.undo_steps,
        )
    }

    pub fn game(&self) -> &GoGame {
        &self.game
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<(), AppError> {
        writeln!(output, "{}", HELP)?;
        self.write_position(output)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            if self.on_line(&line, output)? == ConsoleSideEffect::Quit {
                break;
            }
        }

        Ok(())
    }

    pub fn on_line<W: Write>(
        &mut self,
        line: &str,
        output: &mut W,
    ) -> Result<ConsoleSideEffect, AppError> {
        match parse_command(line) {
            ConsoleCommand::Play(vertex) => {
                match parse_notation(&vertex, self.game.board().size()) {
                    Some(coords) => {
                        let color = self.game.turn();
                        let result = self.game.submit_move(coords.x, coords.y, color);
                        self.write_move_result(result, output)?;
                    }
                    None => writeln!(output, "invalid vertex '{}'", vertex)?,
                }
            }
            ConsoleCommand::Undo => {
                for _ in 0..self.undo_steps {
                    self.game.undo();
                }
                self.write_position(output)?;
            }
            ConsoleCommand::New(size) => {
                let board_size = match size {
                    None => self.game.board().size(),
                    Some(text) => match text.parse::<u8>() {
                        Ok(value) => match validate_board_size(value) {
                            Ok(value) => value,
                            Err(e) => {
                                writeln!(output, "{}", e)?;
                                return Ok(ConsoleSideEffect::None);
                            }
                        },
                        Err(_) => {
                            writeln!(output, "invalid board size '{}'", text)?;
                            return Ok(ConsoleSideEffect::None);
                        }
                    },
                };

                self.game.reset(board_size);
                self.write_position(output)?;
            }
            ConsoleCommand::Show => self.write_position(output)?,
            ConsoleCommand::Request => {
                write!(output, "{}", self.game.suggestion_request().to_yaml()?)?;
            }
            ConsoleCommand::Suggest(text) => match MoveSuggestion::parse(&text) {
                Ok(suggestion) => {
                    info!("applying suggestion: {}", suggestion.rationale);
                    let color = self.game.turn();
                    let result = self.game.submit_suggestion(&suggestion, color);
                    self.write_move_result(result, output)?;
                }
                Err(e) => {
                    warn!("{}", e);
                    writeln!(output, "{}", e)?;
                }
            },
            ConsoleCommand::Quit => return Ok(ConsoleSideEffect::Quit),
            ConsoleCommand::Unknown(text) => {
                writeln!(output, "unknown command '{}'", text)?;
                writeln!(output, "{}", HELP)?;
            }
        }

        Ok(ConsoleSideEffect::None)
    }

    fn write_move_result<W: Write>(
        &self,
        result: Result<PlayedMove, MoveError>,
        output: &mut W,
    ) -> Result<(), AppError> {
        match result {
            Ok(played) => {
                writeln!(
                    output,
                    "{} {} captured {}",
                    played.color.name(),
                    to_notation(played.coords.x, played.coords.y, self.game.board().size()),
                    played.captured
                )?;
                self.write_position(output)
            }
            Err(e) => {
                warn!("move rejected: {}", e);
                writeln!(output, "rejected: {}", e)?;
                Ok(())
            }
        }
    }

    fn write_position<W: Write>(&self, output: &mut W) -> Result<(), AppError> {
        let captures = self.game.captures();
        let last_move = match self.game.last_move() {
            Some(coords) => to_notation(coords.x, coords.y, self.game.board().size()),
            None => "-".to_string(),
        };

        write!(output, "{}", self.game.board().serialize())?;
        writeln!(
            output,
            "to move: {}, captures black {} white {}, last move {}",
            self.game.turn().name(),
            captures.black,
            captures.white,
            last_move
        )?;

        Ok(())
    }
}
