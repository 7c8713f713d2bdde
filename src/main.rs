// src/main.rs
// This is the main entry point for the bingo game. One terminal, two roles:
// the caller draws numbers onto a flashboard, the player marks a card.
//
// Interactive Controls:
// - ENTER/SPACE: call a number (caller) or toggle the cell under the cursor (player)
// - Arrow keys: move the card cursor (player)
// - +/-: adjust the cosmetic player count (caller)
// - n: new game, TAB/r: switch role, F5: redraw, ESC/q: quit

use std::error::Error;

use clap::Parser;

use bingo::config::GameConfig;
use bingo::defs::CARDCONFIG;
use bingo::game::{Game, Role, clamp_players};
use bingo::logging::{log_error_stderr, log_info, log_warning};
use bingo::terminal::{self, KeyAction};

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(about = "Terminal bingo - call numbers on the flashboard or mark your own card")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Start in this role: caller or player
    #[arg(long)]
    role: Option<Role>,

    /// Player count shown on the caller screen (clamped to 1-50)
    #[arg(long)]
    players: Option<u16>,

    /// Load configuration from this file instead of conf/bingo.conf
    #[arg(long)]
    config: Option<String>,
}

fn main() {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match GameConfig::from_file(path) {
            Ok(config) => {
                println!("📄 Loaded configuration from {path}");
                config
            }
            Err(e) => {
                log_error_stderr(&format!("Could not load config from {path}: {e}"));
                std::process::exit(1);
            }
        },
        None => GameConfig::load_or_default(),
    };

    // Command line flags win over the configuration file
    let role = args.role.unwrap_or(config.role);
    let players = match args.players {
        Some(requested) => {
            let clamped = clamp_players(requested);
            if clamped as u16 != requested {
                log_warning(&format!("Player count {requested} clamped to {clamped}"));
            }
            clamped
        }
        None => config.players,
    };

    log_info(&format!("Starting bingo session as {role}"));

    if let Err(e) = run_game(role, players, config.recent_calls) {
        log_error_stderr(&format!("Game terminated with error: {e}"));
        std::process::exit(1);
    }
}

fn run_game(role: Role, players: u8, recent_calls: usize) -> Result<(), Box<dyn Error>> {
    let mut game = Game::new(role);
    game.set_num_players(players as u16);

    let max_col = CARDCONFIG.cols_per_card as usize - 1;
    let max_row = CARDCONFIG.rows_per_card as usize - 1;
    let mut cursor = (0usize, 0usize);

    loop {
        print!("\x1Bc"); // Clear the screen
        match game.role() {
            Role::Caller => terminal::show_caller_screen(&game, recent_calls),
            Role::Player => terminal::show_player_screen(&game, cursor),
        }

        match terminal::wait_for_user_action(game.role())? {
            KeyAction::CallNumber => {
                game.call_number();
            }
            KeyAction::ToggleCell => {
                game.toggle_cell(cursor.0, cursor.1);
            }
            KeyAction::MoveUp => cursor.1 = cursor.1.saturating_sub(1),
            KeyAction::MoveDown => cursor.1 = (cursor.1 + 1).min(max_row),
            KeyAction::MoveLeft => cursor.0 = cursor.0.saturating_sub(1),
            KeyAction::MoveRight => cursor.0 = (cursor.0 + 1).min(max_col),
            KeyAction::NewGame => {
                game.reset();
                cursor = (0, 0);
            }
            KeyAction::SwitchRole => {
                game.switch_role(game.role().other());
                cursor = (0, 0);
            }
            KeyAction::AddPlayer => game.add_player(),
            KeyAction::RemovePlayer => game.remove_player(),
            KeyAction::Refresh => {} // Screen redraws at the top of the loop
            KeyAction::Exit => break,
        }
    }

    println!();
    log_info(&format!("Session closed: {}", game.game_info()));
    Ok(())
}
