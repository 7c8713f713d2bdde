// src/marks.rs
// The set of numbers a player has daubed on their card. Marking is by
// number, not by cell, since every number appears at most once on a card.

use crate::defs::Number;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkedNumbers(HashSet<Number>);

impl MarkedNumbers {
    pub fn new() -> Self {
        MarkedNumbers(HashSet::new())
    }

    pub fn mark(&mut self, number: Number) {
        self.0.insert(number);
    }

    pub fn unmark(&mut self, number: Number) {
        self.0.remove(&number);
    }

    /// Flip the mark on a number and report whether it is now marked.
    pub fn toggle(&mut self, number: Number) -> bool {
        if self.0.remove(&number) {
            false
        } else {
            self.0.insert(number);
            true
        }
    }

    pub fn contains(&self, number: Number) -> bool {
        self.0.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
