// src/board.rs
// The board is the ordered record of every number called this session.
// It backs both the call history list and the caller's flashboard.

use crate::defs::Number;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Board(Vec<Number>);

impl Board {
    pub fn new() -> Self {
        Board(Vec::new())
    }

    pub fn push(&mut self, number: Number) {
        self.0.push(number);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get_numbers(&self) -> &[Number] {
        &self.0
    }

    pub fn contains(&self, number: Number) -> bool {
        self.0.contains(&number)
    }

    /// The most recently called number, if any.
    pub fn last_called(&self) -> Option<Number> {
        self.0.last().copied()
    }

    /// The n numbers called before the current one, most recent first.
    pub fn get_last_numbers(&self, n: usize) -> Vec<Number> {
        if self.0.len() <= 1 {
            return Vec::new();
        }

        let available_previous = self.0.len() - 1;
        let numbers_to_show = std::cmp::min(n, available_previous);
        let start_index = self.0.len() - numbers_to_show - 1;
        let end_index = self.0.len() - 1;

        let mut result: Vec<Number> = self.0[start_index..end_index].to_vec();
        result.reverse();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_keeps_call_order() {
        let mut board = Board::new();
        board.push(42);
        board.push(7);
        board.push(63);

        assert_eq!(board.len(), 3);
        assert_eq!(board.get_numbers(), &[42, 7, 63]);
        assert_eq!(board.last_called(), Some(63));
        assert!(board.contains(7));
        assert!(!board.contains(8));
    }

    #[test]
    fn test_last_numbers_excludes_current() {
        let mut board = Board::new();
        for number in [10, 20, 30, 40, 50] {
            board.push(number);
        }

        // Current call is 50; the three before it, most recent first
        assert_eq!(board.get_last_numbers(3), vec![40, 30, 20]);
        // Asking for more than exist returns all previous calls
        assert_eq!(board.get_last_numbers(10), vec![40, 30, 20, 10]);
    }

    #[test]
    fn test_last_numbers_on_short_boards() {
        let mut board = Board::new();
        assert!(board.get_last_numbers(3).is_empty());

        board.push(5);
        assert!(board.get_last_numbers(3).is_empty());

        board.push(6);
        assert_eq!(board.get_last_numbers(3), vec![5]);
    }
}
