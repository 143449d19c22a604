use gogame_rules::console::Console;
use gogame_rules::core::config::{self, validate_board_size};
use gogame_rules::core::errors::AppError;
use gogame_rules::core::logger;

use clap::{App, Arg};
use log::info;

fn main() -> Result<(), AppError> {
    let matches = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("Sets a custom config file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("debug-file")
                .short("d")
                .long("debug-file")
                .value_name("Debug file")
                .help("Output debug to a file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("N")
                .help("Board size, overrides the config file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
        .get_matches();

    logger::init_logger(
        matches.value_of("debug-file"),
        logger::get_logger_level_by_verbosity(matches.occurrences_of("v")),
    )?;

    let mut app_config = config::get_app_config(matches.value_of("config"))?;

    if let Some(size) = matches.value_of("size") {
        let board_size: u8 = size.parse().map_err(|_| AppError {
            message: format!("invalid board size '{}'", size),
        })?;
        app_config.general.board_size = validate_board_size(board_size)?;
    }

    info!(
        "starting {}x{} game",
        app_config.general.board_size, app_config.general.board_size
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::from_config(&app_config);

    console.run(stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
