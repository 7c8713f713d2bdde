// src/card.rs
// Card generation and access for the bingo game. A card is 5 columns of 5
// numbers, column c drawn without replacement from [15c+1, 15c+15], so all
// 25 numbers are distinct by construction. The center cell is the free spot.

use crate::defs::{CARDCONFIG, FIRSTNUMBER, FREE_COL, FREE_ROW, Number};

use rand::rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card {
    columns: Vec<Vec<Number>>,
}

impl Card {
    /// Generate a fresh random card: shuffle each column's 15-number range
    /// and keep the first 5.
    pub fn generate() -> Self {
        let mut rng = rng();
        let columns = (0..CARDCONFIG.cols_per_card)
            .map(|col| {
                let start = FIRSTNUMBER + col * CARDCONFIG.numbers_per_column;
                let mut range: Vec<Number> =
                    (start..start + CARDCONFIG.numbers_per_column).collect();
                range.shuffle(&mut rng);
                range.truncate(CARDCONFIG.rows_per_card as usize);
                range
            })
            .collect();

        Card { columns }
    }

    /// Build a card from explicit columns (5 columns of 5 numbers).
    pub fn from_columns(columns: Vec<Vec<Number>>) -> Self {
        assert_eq!(columns.len(), CARDCONFIG.cols_per_card as usize);
        for column in &columns {
            assert_eq!(column.len(), CARDCONFIG.rows_per_card as usize);
        }
        Card { columns }
    }

    pub fn number_at(&self, col: usize, row: usize) -> Number {
        self.columns[col][row]
    }

    /// The number sitting under the free center cell.
    pub fn free_number(&self) -> Number {
        self.columns[FREE_COL][FREE_ROW]
    }

    pub fn is_free_cell(col: usize, row: usize) -> bool {
        col == FREE_COL && row == FREE_ROW
    }

    pub fn column_numbers(&self, col: usize) -> &[Number] {
        &self.columns[col]
    }

    /// One number from each column at the same row index.
    pub fn row_numbers(&self, row: usize) -> Vec<Number> {
        self.columns.iter().map(|column| column[row]).collect()
    }

    /// Top-left to bottom-right diagonal.
    pub fn down_diagonal(&self) -> Vec<Number> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| column[i])
            .collect()
    }

    /// Top-right to bottom-left diagonal.
    pub fn up_diagonal(&self) -> Vec<Number> {
        let last_row = CARDCONFIG.rows_per_card as usize - 1;
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| column[last_row - i])
            .collect()
    }

    pub fn contains(&self, number: Number) -> bool {
        self.columns.iter().any(|column| column.contains(&number))
    }
}

#[derive(Debug, Clone)]
pub struct CardWithId {
    pub id: u64,
    pub card: Card,
}

impl CardWithId {
    /// Card ID rendered the way it appears on printed cards.
    pub fn id_string(&self) -> String {
        format!("{:016X}", self.id)
    }
}

#[derive(Debug, Clone)]
pub struct CardGenerator;

impl CardGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a batch of cards with unique content-hash IDs. A colliding
    /// card is regenerated; after MAX_RETRIES we keep what we have rather
    /// than spin forever.
    pub fn generate_cards(&self, requested_cards: usize) -> Vec<CardWithId> {
        const MAX_RETRIES: usize = 100;

        let mut cards = Vec::with_capacity(requested_cards);
        let mut seen_ids = HashSet::new();
        let mut attempts = 0;

        while cards.len() < requested_cards {
            let card = Card::generate();
            let id = self.generate_card_id(&card);

            if seen_ids.insert(id) {
                cards.push(CardWithId { id, card });
                attempts = 0;
                continue;
            }

            attempts += 1;
            if attempts >= MAX_RETRIES {
                eprintln!("Warning: could not generate a unique card ID after {MAX_RETRIES} attempts");
                eprintln!("Proceeding with a potentially duplicate ID");
                cards.push(CardWithId { id, card });
                attempts = 0;
            }
        }

        cards
    }

    fn generate_card_id(&self, card: &Card) -> u64 {
        let mut hasher = DefaultHasher::new();

        // Hash the card content in a deterministic column-major order
        for col in 0..CARDCONFIG.cols_per_card as usize {
            for &number in card.column_numbers(col) {
                hasher.write_u8(number);
            }
        }

        hasher.finish()
    }
}

impl Default for CardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential_card() -> Card {
        Card::from_columns(vec![
            vec![1, 2, 3, 4, 5],
            vec![16, 17, 18, 19, 20],
            vec![31, 32, 33, 34, 35],
            vec![46, 47, 48, 49, 50],
            vec![61, 62, 63, 64, 65],
        ])
    }

    #[test]
    fn test_columns_stay_in_their_ranges() {
        for _ in 0..50 {
            let card = Card::generate();
            for col in 0..5 {
                let low = (col as Number) * 15 + 1;
                let high = low + 14;
                for &number in card.column_numbers(col) {
                    assert!(
                        (low..=high).contains(&number),
                        "column {col} got {number}, expected {low}..={high}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_all_twentyfive_numbers_distinct() {
        for _ in 0..50 {
            let card = Card::generate();
            let mut seen = HashSet::new();
            for col in 0..5 {
                for &number in card.column_numbers(col) {
                    assert!(seen.insert(number), "duplicate number {number} on card");
                }
            }
            assert_eq!(seen.len(), 25);
        }
    }

    #[test]
    fn test_free_cell_is_center_of_n_column() {
        let card = sequential_card();
        assert_eq!(card.free_number(), 33);
        assert!(Card::is_free_cell(2, 2));
        assert!(!Card::is_free_cell(2, 1));
        assert!(!Card::is_free_cell(0, 0));
    }

    #[test]
    fn test_line_accessors() {
        let card = sequential_card();
        assert_eq!(card.number_at(3, 1), 47);
        assert_eq!(card.row_numbers(0), vec![1, 16, 31, 46, 61]);
        assert_eq!(card.row_numbers(4), vec![5, 20, 35, 50, 65]);
        assert_eq!(card.column_numbers(2), &[31, 32, 33, 34, 35]);
        assert_eq!(card.down_diagonal(), vec![1, 17, 33, 49, 65]);
        assert_eq!(card.up_diagonal(), vec![5, 19, 33, 47, 61]);
        assert!(card.contains(64));
        assert!(!card.contains(6));
    }

    #[test]
    fn test_card_ids_are_content_hashes() {
        let generator = CardGenerator::new();
        let card = sequential_card();
        let same = sequential_card();
        assert_eq!(
            generator.generate_card_id(&card),
            generator.generate_card_id(&same)
        );

        let mut other_columns = vec![
            vec![1, 2, 3, 4, 5],
            vec![16, 17, 18, 19, 20],
            vec![31, 32, 33, 34, 35],
            vec![46, 47, 48, 49, 50],
            vec![61, 62, 63, 64, 65],
        ];
        other_columns[0][0] = 6;
        let other = Card::from_columns(other_columns);
        assert_ne!(
            generator.generate_card_id(&card),
            generator.generate_card_id(&other)
        );
    }

    #[test]
    fn test_batch_generation_yields_unique_ids() {
        let generator = CardGenerator::new();
        let cards = generator.generate_cards(12);
        assert_eq!(cards.len(), 12);

        let ids: HashSet<u64> = cards.iter().map(|card| card.id).collect();
        assert_eq!(ids.len(), 12);

        for card in &cards {
            assert_eq!(card.id_string().len(), 16);
        }
    }
}
