// src/defs.rs
// Shared constants and helpers for the bingo game.

pub type Number = u8;

pub struct CardLayout {
    pub cols_per_card: u8,
    pub rows_per_card: u8,
    pub numbers_per_column: u8,
}

pub const CARDCONFIG: CardLayout = CardLayout {
    cols_per_card: 5,       // one column per letter: B I N G O
    rows_per_card: 5,
    numbers_per_column: 15, // size of the draw range behind each column
};

pub const FIRSTNUMBER: Number = 1;
pub const LASTNUMBER: Number =
    CARDCONFIG.cols_per_card * CARDCONFIG.numbers_per_column - 1 + FIRSTNUMBER;
pub const NUMBERSPERCARD: u8 = CARDCONFIG.cols_per_card * CARDCONFIG.rows_per_card;

pub const COLUMN_LETTERS: [char; CARDCONFIG.cols_per_card as usize] = ['B', 'I', 'N', 'G', 'O'];

// Center cell, the permanent free marker on every card
pub const FREE_COL: usize = (CARDCONFIG.cols_per_card / 2) as usize;
pub const FREE_ROW: usize = (CARDCONFIG.rows_per_card / 2) as usize;

/// Letter for a called number: index = (number - 1) / 15 into B I N G O.
pub fn column_letter(number: Number) -> char {
    COLUMN_LETTERS[((number - FIRSTNUMBER) / CARDCONFIG.numbers_per_column) as usize]
}

/// Display label for a called number, e.g. "B-7" or "O-75".
pub fn number_label(number: Number) -> String {
    format!("{}-{}", column_letter(number), number)
}

pub struct Colors;

impl Colors {
    pub fn green() -> &'static str {
        "\x1b[1;32m"
    }

    pub fn yellow() -> &'static str {
        "\x1b[1;33m"
    }

    pub fn blue() -> &'static str {
        "\x1b[1;34m"
    }

    pub fn reverse() -> &'static str {
        "\x1b[7m"
    }

    pub fn reset() -> &'static str {
        "\x1b[0m"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_mapping() {
        assert_eq!(column_letter(1), 'B');
        assert_eq!(column_letter(15), 'B');
        assert_eq!(column_letter(16), 'I');
        assert_eq!(column_letter(31), 'N');
        assert_eq!(column_letter(46), 'G');
        assert_eq!(column_letter(61), 'O');
        assert_eq!(column_letter(75), 'O');
    }

    #[test]
    fn test_number_label() {
        assert_eq!(number_label(7), "B-7");
        assert_eq!(number_label(40), "N-40");
        assert_eq!(number_label(75), "O-75");
    }

    #[test]
    fn test_layout_constants() {
        assert_eq!(FIRSTNUMBER, 1);
        assert_eq!(LASTNUMBER, 75);
        assert_eq!(NUMBERSPERCARD, 25);
        assert_eq!(FREE_COL, 2);
        assert_eq!(FREE_ROW, 2);
    }
}
