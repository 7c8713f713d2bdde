// src/terminal.rs
// This module handles terminal input/output for the bingo game: screen
// rendering for both roles plus raw-mode single-key capture.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode},
};

use crate::card::Card;
use crate::defs::{CARDCONFIG, COLUMN_LETTERS, Colors, FIRSTNUMBER, Number, number_label};
use crate::game::{Game, Role};

/// One decoded key press, already filtered by the active role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    CallNumber,
    ToggleCell,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    NewGame,
    SwitchRole,
    AddPlayer,
    RemovePlayer,
    Refresh,
    Exit,
}

/// Block until the user presses a key that maps to an action for the given
/// role. Raw mode is only held for the duration of the read.
pub fn wait_for_user_action(role: Role) -> Result<KeyAction, Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let action = read_key_action(role);
    disable_raw_mode()?;
    action
}

fn read_key_action(role: Role) -> Result<KeyAction, Box<dyn std::error::Error>> {
    // Clear any pending events in the buffer
    while event::poll(std::time::Duration::from_millis(0))? {
        event::read()?;
    }

    loop {
        if let Event::Key(key_event) = event::read()? {
            // Only process key press events, not key release events
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            match key_event.code {
                KeyCode::Esc | KeyCode::Char('q') => return Ok(KeyAction::Exit),
                KeyCode::Char('n') => return Ok(KeyAction::NewGame),
                KeyCode::Tab | KeyCode::Char('r') => return Ok(KeyAction::SwitchRole),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    return Ok(match role {
                        Role::Caller => KeyAction::CallNumber,
                        Role::Player => KeyAction::ToggleCell,
                    });
                }
                KeyCode::Up if role == Role::Player => return Ok(KeyAction::MoveUp),
                KeyCode::Down if role == Role::Player => return Ok(KeyAction::MoveDown),
                KeyCode::Left if role == Role::Player => return Ok(KeyAction::MoveLeft),
                KeyCode::Right if role == Role::Player => return Ok(KeyAction::MoveRight),
                KeyCode::Char('+') | KeyCode::Char('=') if role == Role::Caller => {
                    return Ok(KeyAction::AddPlayer);
                }
                KeyCode::Char('-') if role == Role::Caller => {
                    return Ok(KeyAction::RemovePlayer);
                }
                KeyCode::F(5) => return Ok(KeyAction::Refresh),
                _ => {} // Ignore keys without a meaning in this role
            }
        }
    }
}

/// Render the caller view: player count, last and recent calls, the
/// flashboard of all 75 numbers, and the pouch status.
pub fn show_caller_screen(game: &Game, recent: usize) {
    println!("BINGO - caller mode        {}", game.id());
    println!(
        "Players at the table: {}  (+/- to adjust)",
        game.num_players()
    );
    println!();

    match game.current_number() {
        Some(number) => println!(
            "Last called: {}{}{}",
            Colors::green(),
            number_label(number),
            Colors::reset()
        ),
        None => println!("No number called yet"),
    }

    let previous = game.board().get_last_numbers(recent);
    if !previous.is_empty() {
        let labels: Vec<String> = previous.iter().map(|&n| number_label(n)).collect();
        println!("Previous: {}", labels.join("  "));
    }

    if !game.board().is_empty() {
        let history: Vec<String> = game
            .board()
            .get_numbers()
            .iter()
            .map(|&n| number_label(n))
            .collect();
        println!(
            "\nCalled so far ({}): {}",
            game.board().len(),
            history.join(" ")
        );
    }

    println!();
    print_flashboard(game);

    match game.pouch_len() {
        0 => println!("\nThe pouch is empty!"),
        left => println!("\nRemaining in pouch: {left}"),
    }

    println!("\n[Enter] call  [+/-] players  [n] new game  [Tab] switch role  [Esc] quit");
}

// The flashboard is one row per letter, every number of the range, with
// called numbers in yellow and the latest call in green
fn print_flashboard(game: &Game) {
    for (index, &letter) in COLUMN_LETTERS.iter().enumerate() {
        print!(" {letter} ");
        let start = FIRSTNUMBER + index as Number * CARDCONFIG.numbers_per_column;
        for number in start..start + CARDCONFIG.numbers_per_column {
            if game.current_number() == Some(number) {
                print!("{}{number:3}{}", Colors::green(), Colors::reset());
            } else if game.board().contains(number) {
                print!("{}{number:3}{}", Colors::yellow(), Colors::reset());
            } else {
                print!("{number:3}");
            }
        }
        println!();
    }
}

/// Render the player view: the card with marks, free cell, and cursor, plus
/// the win banner once a line is complete.
pub fn show_player_screen(game: &Game, cursor: (usize, usize)) {
    println!("BINGO - player mode        {}", game.id());
    println!();

    if let Some(number) = game.current_number() {
        println!(
            "Last called: {}{}{}\n",
            Colors::green(),
            number_label(number),
            Colors::reset()
        );
    }

    print_player_card(game, cursor);

    if let Some(line) = game.winning_line() {
        println!(
            "\n🎉 {}BINGO!!!{} ({}) 🎉",
            Colors::green(),
            Colors::reset(),
            line.describe()
        );
    }

    println!("\n[arrows] move  [Enter] mark  [n] new card  [Tab] switch role  [Esc] quit");
}

fn print_player_card(game: &Game, cursor: (usize, usize)) {
    println!("┌────────┬────────┬────────┬────────┬────────┐");

    print!("│");
    for &letter in COLUMN_LETTERS.iter() {
        print!("{}   {}    {}│", Colors::blue(), letter, Colors::reset());
    }
    println!();
    println!("├────────┼────────┼────────┼────────┼────────┤");

    for row in 0..CARDCONFIG.rows_per_card as usize {
        print!("│");
        for col in 0..CARDCONFIG.cols_per_card as usize {
            print!("{}│", format_cell(game, cursor, col, row));
        }
        println!();
    }

    println!("└────────┴────────┴────────┴────────┴────────┘");
}

fn format_cell(game: &Game, cursor: (usize, usize), col: usize, row: usize) -> String {
    let number = game.card().number_at(col, row);
    let text = if Card::is_free_cell(col, row) {
        "  FREE  ".to_string()
    } else {
        format!("   {number:2}   ")
    };

    let mut style = String::new();
    if cursor == (col, row) {
        style.push_str(Colors::reverse());
    }

    let on_winning_line = game
        .winning_line()
        .is_some_and(|line| line.covers(col, row));
    if on_winning_line {
        style.push_str(Colors::yellow());
    } else if Card::is_free_cell(col, row) {
        style.push_str(Colors::yellow());
    } else if game.marks().contains(number) {
        style.push_str(Colors::green());
    }

    if style.is_empty() {
        text
    } else {
        format!("{style}{text}{}", Colors::reset())
    }
}

/// Print a dealt card as a bordered table with its ID in the title row.
pub fn print_card_as_table(card_number: usize, card_id: &str, card: &Card) {
    println!("\n┌────────────────────────────────────────────┐");
    println!("{}", card_table_title(card_number, card_id));
    println!("├────────┬────────┬────────┬────────┬────────┤");

    print!("│");
    for &letter in COLUMN_LETTERS.iter() {
        print!("   {letter}    │");
    }
    println!();
    println!("├────────┼────────┼────────┼────────┼────────┤");

    for row in 0..CARDCONFIG.rows_per_card as usize {
        print!("│");
        for col in 0..CARDCONFIG.cols_per_card as usize {
            if Card::is_free_cell(col, row) {
                print!("  FREE  │");
            } else {
                print!("   {:2}   │", card.number_at(col, row));
            }
        }
        println!();
    }

    println!("└────────┴────────┴────────┴────────┴────────┘");
}

// Title row padded so the right border lines up with the cell rows below
fn card_table_title(card_number: usize, card_id: &str) -> String {
    let title_text = format!("Card {card_number} - ID: {card_id}");
    let box_width: usize = 42;
    let padding = box_width.saturating_sub(title_text.len());
    format!("│ {}{} │", title_text, " ".repeat(padding))
}
