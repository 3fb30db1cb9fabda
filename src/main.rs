use std::cmp::max;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use bitboard_checkers::console::console_top::{run_stdio_loop, ConsoleConfig};
use bitboard_checkers::game_state::game_state::GameState;
use bitboard_checkers::utils::save_parser::load_game;

/// Two-player bitboard checkers in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct CmdArgs {
    /// Directory that save and load file names are resolved against.
    #[arg(long, default_value = ".")]
    save_dir: PathBuf,

    /// Start from a saved game instead of the opening position.
    #[arg(long)]
    load: Option<PathBuf>,

    /// Hide the numbered reference board shown during each move.
    #[arg(long, default_value_t = false)]
    no_reference_board: bool,

    /// Enable debug mode. Raises the log level to at least `Debug`.
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Log level for messages written to stderr.
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    /// Disable colored log output.
    #[arg(long, default_value_t = false)]
    no_colors: bool,
}

fn init_logging(args: &CmdArgs) -> Result<()> {
    let log_level = if args.debug {
        max(LevelFilter::Debug, args.log_level)
    } else {
        args.log_level
    };

    let mut config_builder = simplelog::ConfigBuilder::new();
    if args.debug {
        config_builder.set_time_level(LevelFilter::Error);
        config_builder.set_time_format_rfc3339();
        config_builder.set_thread_level(LevelFilter::Error);
        config_builder.set_target_level(LevelFilter::Error);
        config_builder.set_location_level(LevelFilter::Error);
    } else {
        config_builder.set_time_level(LevelFilter::Off);
        config_builder.set_thread_level(LevelFilter::Off);
        config_builder.set_target_level(LevelFilter::Off);
        config_builder.set_location_level(LevelFilter::Off);
    }

    let color_choice = if args.no_colors {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    // stdout belongs to the game board
    TermLogger::init(
        log_level,
        config_builder.build(),
        TerminalMode::Stderr,
        color_choice,
    )?;
    Ok(())
}

fn main() -> Result<()> {
    let args = CmdArgs::parse();
    init_logging(&args)?;
    log::debug!("Parsed arguments: {args:?}");

    let initial_state = match &args.load {
        Some(path) => load_game(path)?,
        None => GameState::new_game(),
    };

    let config = ConsoleConfig {
        save_dir: args.save_dir,
        show_reference_board: !args.no_reference_board,
    };

    run_stdio_loop(config, initial_state)?;
    Ok(())
}
