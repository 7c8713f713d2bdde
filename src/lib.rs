// lib.rs
// Library modules for the bingo game

pub mod board;
pub mod card;
pub mod config;
pub mod defs;
pub mod game;
pub mod logging;
pub mod marks;
pub mod pouch;
pub mod score;
pub mod terminal;
