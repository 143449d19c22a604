use super::errors::AppError;
use crate::core::helpers::MAX_BOARD_SIZE;
use directories::ProjectDirs;
use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::prelude::*;
use std::path::PathBuf;

pub const MIN_BOARD_SIZE: u8 = 2;

#[derive(Debug, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "get_default_general_config")]
    pub general: GeneralConfig,
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "get_default_board_size")]
    pub board_size: u8,
    /// Snapshots popped per console `undo`; 2 steps back past a reply.
    #[serde(default = "get_default_undo_steps")]
    pub undo_steps: u8,
}

pub fn get_app_config(config_path: Option<&str>) -> Result<AppConfig, AppError> {
    let config_file_path: PathBuf = if let Some(str_value) = config_path {
        PathBuf::from(&str_value)
    } else {
        get_default_app_config_path()?
    };

    info!(
        "loading config from '{}'",
        config_file_path.to_string_lossy()
    );

    let config_file_content: String = if config_file_path.exists() {
        let mut file = File::open(&config_file_path).map_err(|e| AppError {
            message: format!(
                "Error opening the file '{}': {}",
                &config_file_path.to_string_lossy(),
                &e.to_string()
            ),
        })?;
        let mut contents = String::new();

        file.read_to_string(&mut contents).map_err(|e| AppError {
            message: format!(
                "Error reading the file '{}': {}",
                &config_file_path.to_string_lossy(),
                &e.to_string()
            ),
        })?;

        contents
    } else {
        "empty: true".to_string()
    };

    parse_app_config(&config_file_content, &config_file_path.to_string_lossy())
}

/// Parses and validates config text; `origin` only labels error messages.
pub fn parse_app_config(content: &str, origin: &str) -> Result<AppConfig, AppError> {
    let app_config: AppConfig = serde_yaml::from_str(content).map_err(|e| AppError {
        message: format!(
            "Error parsing content of the file '{}': {}",
            origin,
            &e.to_string()
        ),
    })?;

    validate_board_size(app_config.general.board_size).map_err(|e| AppError {
        message: format!("Invalid config in '{}': {}", origin, e.message),
    })?;

    if !(1..=2).contains(&app_config.general.undo_steps) {
        return Err(AppError {
            message: format!(
                "Invalid config in '{}': undo_steps must be 1 or 2, got {}",
                origin, app_config.general.undo_steps
            ),
        });
    }

    Ok(app_config)
}

pub fn validate_board_size(board_size: u8) -> Result<u8, AppError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
        Ok(board_size)
    } else {
        Err(AppError {
            message: format!(
                "board size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, board_size
            ),
        })
    }
}

fn get_default_app_config_path() -> Result<PathBuf, AppError> {
    match ProjectDirs::from("Com", "Gogame", env!("CARGO_PKG_NAME")) {
        Some(proj_dirs) => {
            let config_file_path = proj_dirs.config_dir().join("config.yml");

            Ok(config_file_path)
        }
        None => Err(AppError {
            message: "Can't get app project dir".to_string(),
        }),
    }
}

fn get_default_general_config() -> GeneralConfig {
    GeneralConfig {
        board_size: get_default_board_size(),
        undo_steps: get_default_undo_steps(),
    }
}

fn get_default_board_size() -> u8 {
    19
}

fn get_default_undo_steps() -> u8 {
    1
}
