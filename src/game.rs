// src/game.rs
// Unified Game struct holding all session state: the active role, the
// player's card and marks, the draw history and pouch, and the win flag.
// Everything mutates synchronously in response to one key press at a time,
// so the state is plainly owned with no locking.

use crate::board::Board;
use crate::card::Card;
use crate::defs::Number;
use crate::marks::MarkedNumbers;
use crate::pouch::Pouch;
use crate::score::{WinningLine, check_win};

use rand::RngExt;
use std::fmt;
use std::str::FromStr;

pub const MIN_PLAYERS: u8 = 1;
pub const MAX_PLAYERS: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Caller,
    Player,
}

impl Role {
    pub fn other(&self) -> Role {
        match self {
            Role::Caller => Role::Player,
            Role::Player => Role::Caller,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Caller => write!(f, "caller"),
            Role::Player => write!(f, "player"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "caller" => Ok(Role::Caller),
            "player" => Ok(Role::Player),
            other => Err(format!("unknown role '{other}', expected 'caller' or 'player'")),
        }
    }
}

/// Clamp a requested player count into the allowed range. Zero (the
/// normalized form of empty input) comes out as the minimum.
pub fn clamp_players(requested: u16) -> u8 {
    requested.clamp(MIN_PLAYERS as u16, MAX_PLAYERS as u16) as u8
}

pub struct Game {
    id: String,
    role: Role,
    card: Card,
    marks: MarkedNumbers,
    board: Board,
    pouch: Pouch,
    current_number: Option<Number>,
    winning_line: Option<WinningLine>,
    num_players: u8,
}

impl Game {
    /// Create a new game session in the given role.
    pub fn new(role: Role) -> Self {
        let mut game = Game {
            id: Self::generate_id(),
            role,
            card: Card::generate(),
            marks: MarkedNumbers::new(),
            board: Board::new(),
            pouch: Pouch::new(),
            current_number: None,
            winning_line: None,
            num_players: MIN_PLAYERS,
        };
        game.seed_free_cell();
        game
    }

    fn generate_id() -> String {
        let mut rng = rand::rng();
        format!("game_{:08x}", rng.random::<u32>())
    }

    // The free cell starts marked, but only where marks matter
    fn seed_free_cell(&mut self) {
        if self.role == Role::Player {
            self.marks.mark(self.card.free_number());
        }
    }

    /// Start over: fresh card, empty marks (plus the free cell in player
    /// mode), full pouch, cleared history and win flag. The player count
    /// deliberately survives a reset.
    pub fn reset(&mut self) {
        self.id = Self::generate_id();
        self.card = Card::generate();
        self.marks.clear();
        self.board = Board::new();
        self.pouch = Pouch::new();
        self.current_number = None;
        self.winning_line = None;
        self.seed_free_cell();
    }

    /// Change role. Switching always resets the session.
    pub fn switch_role(&mut self, role: Role) {
        self.role = role;
        self.reset();
    }

    /// Draw one number from the pouch (caller mode only). Returns None when
    /// the pouch is empty or the role does not allow calling.
    pub fn call_number(&mut self) -> Option<Number> {
        if self.role != Role::Caller {
            return None;
        }
        let number = self.pouch.extract()?;
        self.board.push(number);
        self.current_number = Some(number);
        Some(number)
    }

    /// Toggle the mark on a card cell (player mode only). The free center
    /// cell cannot be unmarked. Returns whether the marks changed.
    pub fn toggle_cell(&mut self, col: usize, row: usize) -> bool {
        if self.role != Role::Player || Card::is_free_cell(col, row) {
            return false;
        }

        let number = self.card.number_at(col, row);
        self.marks.toggle(number);

        // A win sticks until reset, so never re-evaluate past the first one
        if self.winning_line.is_none() {
            self.winning_line = check_win(&self.card, &self.marks);
        }
        true
    }

    pub fn set_num_players(&mut self, requested: u16) {
        self.num_players = clamp_players(requested);
    }

    pub fn add_player(&mut self) {
        self.num_players = clamp_players(self.num_players as u16 + 1);
    }

    pub fn remove_player(&mut self) {
        self.num_players = clamp_players(self.num_players.saturating_sub(1) as u16);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn marks(&self) -> &MarkedNumbers {
        &self.marks
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_number(&self) -> Option<Number> {
        self.current_number
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn has_won(&self) -> bool {
        self.winning_line.is_some()
    }

    pub fn num_players(&self) -> u8 {
        self.num_players
    }

    pub fn pouch_len(&self) -> usize {
        self.pouch.len()
    }

    pub fn is_pouch_empty(&self) -> bool {
        self.pouch.is_empty()
    }

    /// Game information as a formatted string for logging.
    pub fn game_info(&self) -> String {
        format!(
            "Game[id={}, role={}, called={}, remaining={}, players={}, won={}]",
            self.id,
            self.role,
            self.board.len(),
            self.pouch.len(),
            self.num_players,
            self.has_won()
        )
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Role::Player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_game_creation() {
        let game = Game::new(Role::Player);

        assert_eq!(game.role(), Role::Player);
        assert_eq!(game.board().len(), 0);
        assert_eq!(game.pouch_len(), 75);
        assert_eq!(game.current_number(), None);
        assert!(!game.has_won());
        assert_eq!(game.num_players(), 1);

        // Only the free center cell starts marked
        assert_eq!(game.marks().len(), 1);
        assert!(game.marks().contains(game.card().free_number()));

        assert!(game.id().starts_with("game_"));
        assert_eq!(game.id().len(), 13); // "game_" + 8 hex chars
    }

    #[test]
    fn test_caller_starts_with_no_marks() {
        let game = Game::new(Role::Caller);
        assert!(game.marks().is_empty());
    }

    #[test]
    fn test_calling_drains_pouch_without_repeats() {
        let mut game = Game::new(Role::Caller);
        let mut seen = HashSet::new();

        for _ in 0..75 {
            let number = game.call_number().unwrap();
            assert!((1..=75).contains(&number));
            assert!(seen.insert(number), "number {number} called twice");
        }

        assert_eq!(game.board().len(), 75);
        assert!(game.is_pouch_empty());

        // 76th call is a no-op
        let last = game.current_number();
        assert_eq!(game.call_number(), None);
        assert_eq!(game.board().len(), 75);
        assert_eq!(game.current_number(), last);
    }

    #[test]
    fn test_call_updates_current_number_and_board() {
        let mut game = Game::new(Role::Caller);
        let number = game.call_number().unwrap();

        assert_eq!(game.current_number(), Some(number));
        assert_eq!(game.board().last_called(), Some(number));
        assert_eq!(game.pouch_len(), 74);
    }

    #[test]
    fn test_player_cannot_call() {
        let mut game = Game::new(Role::Player);
        assert_eq!(game.call_number(), None);
        assert_eq!(game.board().len(), 0);
        assert_eq!(game.pouch_len(), 75);
    }

    #[test]
    fn test_caller_cannot_toggle_cells() {
        let mut game = Game::new(Role::Caller);
        assert!(!game.toggle_cell(0, 0));
        assert!(game.marks().is_empty());
    }

    #[test]
    fn test_free_cell_cannot_be_unmarked() {
        let mut game = Game::new(Role::Player);
        let free = game.card().free_number();

        assert!(!game.toggle_cell(2, 2));
        assert!(game.marks().contains(free));
    }

    #[test]
    fn test_toggle_marks_and_unmarks() {
        let mut game = Game::new(Role::Player);
        let number = game.card().number_at(0, 3);

        assert!(game.toggle_cell(0, 3));
        assert!(game.marks().contains(number));

        assert!(game.toggle_cell(0, 3));
        assert!(!game.marks().contains(number));
    }

    #[test]
    fn test_row_win_detected_after_toggle() {
        let mut game = Game::new(Role::Player);

        for col in 0..5 {
            assert!(!game.has_won());
            game.toggle_cell(col, 0);
        }

        assert_eq!(game.winning_line(), Some(WinningLine::Row(0)));
    }

    #[test]
    fn test_column_win_through_free_cell() {
        let mut game = Game::new(Role::Player);

        // The free cell at (2, 2) completes the N column
        for row in [0, 1, 3, 4] {
            game.toggle_cell(2, row);
        }

        assert_eq!(game.winning_line(), Some(WinningLine::Column(2)));
    }

    #[test]
    fn test_win_sticks_until_reset() {
        let mut game = Game::new(Role::Player);

        for col in 0..5 {
            game.toggle_cell(col, 1);
        }
        assert!(game.has_won());

        // Unmarking a winning cell does not clear the flag
        game.toggle_cell(3, 1);
        assert!(game.has_won());

        game.reset();
        assert!(!game.has_won());
    }

    #[test]
    fn test_reset_clears_session() {
        let mut game = Game::new(Role::Caller);
        let original_id = game.id().to_string();

        for _ in 0..10 {
            game.call_number();
        }
        assert_eq!(game.board().len(), 10);

        game.reset();

        assert_ne!(game.id(), original_id);
        assert_eq!(game.board().len(), 0);
        assert_eq!(game.pouch_len(), 75);
        assert_eq!(game.current_number(), None);
    }

    #[test]
    fn test_reset_is_idempotent_in_effect() {
        let mut game = Game::new(Role::Player);
        game.toggle_cell(1, 1);

        game.reset();
        game.reset();

        assert_eq!(game.board().len(), 0);
        assert_eq!(game.pouch_len(), 75);
        assert_eq!(game.marks().len(), 1);
        assert!(game.marks().contains(game.card().free_number()));
        assert!(!game.has_won());
    }

    #[test]
    fn test_switch_role_resets_session() {
        let mut game = Game::new(Role::Caller);
        for _ in 0..5 {
            game.call_number();
        }

        game.switch_role(Role::Player);

        assert_eq!(game.role(), Role::Player);
        assert_eq!(game.board().len(), 0);
        assert_eq!(game.pouch_len(), 75);
        assert_eq!(game.marks().len(), 1);

        game.switch_role(Role::Caller);
        assert_eq!(game.role(), Role::Caller);
        assert!(game.marks().is_empty());
    }

    #[test]
    fn test_player_count_clamping() {
        assert_eq!(clamp_players(0), 1);
        assert_eq!(clamp_players(1), 1);
        assert_eq!(clamp_players(25), 25);
        assert_eq!(clamp_players(50), 50);
        assert_eq!(clamp_players(51), 50);
        assert_eq!(clamp_players(999), 50);
    }

    #[test]
    fn test_player_count_survives_reset() {
        let mut game = Game::new(Role::Caller);
        game.set_num_players(7);

        game.reset();
        assert_eq!(game.num_players(), 7);

        game.switch_role(Role::Player);
        assert_eq!(game.num_players(), 7);
    }

    #[test]
    fn test_player_count_bounds_on_adjust() {
        let mut game = Game::new(Role::Caller);

        game.remove_player();
        assert_eq!(game.num_players(), 1);

        game.set_num_players(50);
        game.add_player();
        assert_eq!(game.num_players(), 50);

        game.remove_player();
        assert_eq!(game.num_players(), 49);
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("caller".parse::<Role>().unwrap(), Role::Caller);
        assert_eq!("Player".parse::<Role>().unwrap(), Role::Player);
        assert_eq!(" CALLER ".parse::<Role>().unwrap(), Role::Caller);
        assert!("dealer".parse::<Role>().is_err());

        assert_eq!(Role::Caller.to_string(), "caller");
        assert_eq!(Role::Player.other(), Role::Caller);
    }

    #[test]
    fn test_game_info_format() {
        let mut game = Game::new(Role::Caller);
        game.call_number();

        let info = game.game_info();
        assert!(info.starts_with("Game[id=game_"));
        assert!(info.contains("role=caller"));
        assert!(info.contains("called=1"));
        assert!(info.contains("remaining=74"));
        assert!(info.contains("won=false"));
    }
}
