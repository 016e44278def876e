//! Core connect-N game logic: board representation, players, the win scan,
//! and the mutable game state driven by a turn loop.

mod board;
mod player;
pub mod scan;
mod state;

pub use board::{Board, Cell, EMPTY_SYMBOL};
pub use player::{roster, Player};
pub use scan::{Direction, DirectionCounts, HorizontalScan};
pub use state::{GameOutcome, GameState, MoveError};
