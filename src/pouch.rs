// src/pouch.rs
// The pouch holds every number that has not been called yet.

use crate::defs::{FIRSTNUMBER, LASTNUMBER, Number};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct Pouch {
    pub numbers: Vec<Number>,
}

impl Pouch {
    pub fn new() -> Self {
        Pouch {
            numbers: (FIRSTNUMBER..=LASTNUMBER).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Draw one number uniformly at random, without replacement.
    /// Returns None once the pouch is exhausted.
    pub fn extract(&mut self) -> Option<Number> {
        if self.is_empty() {
            None
        } else {
            let random_index = rand::random_range(0..self.len());
            Some(self.numbers.remove(random_index))
        }
    }
}

impl Default for Pouch {
    fn default() -> Self {
        Self::new()
    }
}
