//! # connect_n
//!
//! A generalized connect-N game: two or more players drop tokens into a board
//! of any width and height, and the first to line up `target` tokens wins.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win scan, game state
//! - [`shell`] — Console driver for setting up and playing a game
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod shell;
