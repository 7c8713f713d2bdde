// src/score.rs
// Win evaluation for the bingo game. A card wins on any fully marked row,
// column, or diagonal. The free center cell carries a real number that is
// pre-marked, so it needs no special casing here.

use crate::card::Card;
use crate::defs::{CARDCONFIG, Number, column_letter};
use crate::marks::MarkedNumbers;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinningLine {
    Row(usize),
    Column(usize),
    DownDiagonal,
    UpDiagonal,
}

impl WinningLine {
    /// The numbers making up this line on the given card.
    pub fn numbers(&self, card: &Card) -> Vec<Number> {
        match *self {
            WinningLine::Row(row) => card.row_numbers(row),
            WinningLine::Column(col) => card.column_numbers(col).to_vec(),
            WinningLine::DownDiagonal => card.down_diagonal(),
            WinningLine::UpDiagonal => card.up_diagonal(),
        }
    }

    pub fn describe(&self) -> String {
        match *self {
            WinningLine::Row(row) => format!("row {}", row + 1),
            WinningLine::Column(col) => {
                let first = CARDCONFIG.numbers_per_column * col as Number + 1;
                format!("column {}", column_letter(first))
            }
            WinningLine::DownDiagonal => "down diagonal".to_string(),
            WinningLine::UpDiagonal => "up diagonal".to_string(),
        }
    }

    /// Whether the cell at (col, row) lies on this line.
    pub fn covers(&self, col: usize, row: usize) -> bool {
        let last_row = CARDCONFIG.rows_per_card as usize - 1;
        match *self {
            WinningLine::Row(r) => row == r,
            WinningLine::Column(c) => col == c,
            WinningLine::DownDiagonal => row == col,
            WinningLine::UpDiagonal => row == last_row - col,
        }
    }
}

/// Find the first completed line on the card, checking rows, then columns,
/// then the two diagonals.
pub fn check_win(card: &Card, marks: &MarkedNumbers) -> Option<WinningLine> {
    let all_marked = |numbers: &[Number]| numbers.iter().all(|&n| marks.contains(n));

    for row in 0..CARDCONFIG.rows_per_card as usize {
        if all_marked(&card.row_numbers(row)) {
            return Some(WinningLine::Row(row));
        }
    }

    for col in 0..CARDCONFIG.cols_per_card as usize {
        if all_marked(card.column_numbers(col)) {
            return Some(WinningLine::Column(col));
        }
    }

    if all_marked(&card.down_diagonal()) {
        return Some(WinningLine::DownDiagonal);
    }

    if all_marked(&card.up_diagonal()) {
        return Some(WinningLine::UpDiagonal);
    }

    None
}
