mod cli_config;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tictactoe_common::logger::{self, LogLevel};
use tictactoe_common::log;
use tictactoe_common::tictactoe::{GameMode, Mark};

use cli_config::{
    CliConfig, default_config_path, get_config_manager, write_default_config,
};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe with an unbeatable minimax opponent")]
struct Args {
    /// Config file, defaults to tictactoe_config.yaml next to the executable
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    use_log_prefix: bool,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether a board is won, drawn or still in progress
    Outcome {
        /// Nine cells in row-major order, e.g. "XO-/-X-/--O"
        #[arg(allow_hyphen_values = true)]
        board: String,
    },
    /// Pick the optimal cell for the mark to move
    BestMove {
        #[arg(allow_hyphen_values = true)]
        board: String,
        #[arg(long, default_value = "O")]
        mark: Mark,
        #[arg(long)]
        show_scores: bool,
    },
    /// Play a scripted game from the given cell indices
    Play {
        #[arg(long)]
        mode: Option<GameMode>,
        moves: Vec<usize>,
    },
    /// Let the computer play both sides
    SelfPlay,
    /// Write the default config file
    InitConfig {
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config_manager = get_config_manager(&config_path);
    // init-config must work even when the existing file no longer parses.
    let config = if matches!(args.command, Command::InitConfig { .. }) {
        CliConfig::default()
    } else {
        config_manager.get_config()?
    };

    let prefix = match (&config.log_prefix, args.use_log_prefix) {
        (Some(prefix), _) => Some(prefix.clone()),
        (None, true) => Some("TicTacToe".to_string()),
        (None, false) => None,
    };
    let level = if args.verbose { LogLevel::Debug } else { config.log_level };
    logger::init_logger(prefix, level);

    let output = match args.command {
        Command::Outcome { board } => commands::outcome(&board)?,
        Command::BestMove {
            board,
            mark,
            show_scores,
        } => commands::best_move_for(&board, mark, show_scores || config.show_scores)?,
        Command::Play { mode, moves } => commands::play(mode.unwrap_or(config.mode), &moves)?,
        Command::SelfPlay => commands::self_play()?,
        Command::InitConfig { force } => {
            write_default_config(&config_manager, &config_path, force)?;
            log!("Wrote default config to {}", config_path.display());
            format!("{}", config_path.display())
        }
    };

    println!("{}", output);
    Ok(())
}
