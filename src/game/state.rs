use std::fmt;

use tracing::{debug, instrument};

use super::player::{roster, Player};
use super::scan::{self, HorizontalScan};
use super::Board;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome<'a> {
    Winner(&'a Player),
    Draw,
}

/// Why a column cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (width {width})")]
    OutOfRange { column: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// The board, the player rotation and the win target of one game.
///
/// Column and coordinate arguments to the query and mutation methods are
/// trusted; out-of-range values panic. Use [`GameState::check_column`] to
/// validate untrusted input first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: Vec<Player>,
    target: usize,
    moves_made: usize,
    horizontal: HorizontalScan,
}

impl GameState {
    /// Create initial game state
    pub fn new<I, S>(width: usize, height: usize, target: usize, names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players = roster(names)?;
        debug!(width, height, target, players = players.len(), "new game");
        Ok(GameState {
            board: Board::new(width, height),
            players,
            target,
            moves_made: 0,
            horizontal: HorizontalScan::default(),
        })
    }

    /// Choose which row the horizontal win probes read from.
    pub fn with_horizontal_scan(mut self, horizontal: HorizontalScan) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Board dimensions as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.board.width(), self.board.height())
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Players in rotation order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn horizontal_scan(&self) -> HorizontalScan {
        self.horizontal
    }

    /// Number of tokens placed so far.
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.board.is_column_full(col)
    }

    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// The player whose turn is next.
    pub fn current_player(&self) -> &Player {
        &self.players[self.moves_made % self.players.len()]
    }

    /// Validate a 0-based column before handing it to [`GameState::play`].
    pub fn check_column(&self, col: usize) -> Result<(), MoveError> {
        let width = self.board.width();
        if col >= width {
            return Err(MoveError::OutOfRange { column: col, width });
        }
        if self.board.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }
        Ok(())
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's token into `col`.
    ///
    /// Returns `false` and leaves the game untouched if the column is full.
    /// On success the rotation moves on to the next player.
    #[instrument(skip(self), fields(player = %self.current_player().name()))]
    pub fn play(&mut self, col: usize) -> bool {
        let token = self.current_player().token();
        match self.board.drop_token(col, token) {
            Some(row) => {
                self.moves_made += 1;
                debug!(row, "token placed");
                true
            }
            None => {
                debug!("column full, move rejected");
                false
            }
        }
    }

    /// True once the board is full or some cell completes a run of
    /// `target` tokens.
    pub fn is_game_over(&self) -> bool {
        if self.is_board_full() {
            return true;
        }
        match scan::find_win(&self.board, self.target, self.horizontal) {
            Some(win) => {
                debug!(col = win.col, row = win.row, direction = ?win.direction, "run completed");
                true
            }
            None => false,
        }
    }

    /// The player who made the most recent move, or `None` if the board is
    /// full or nobody has moved yet. Only meaningful once
    /// [`GameState::is_game_over`] is true.
    pub fn winner(&self) -> Option<&Player> {
        if self.is_board_full() || self.moves_made == 0 {
            return None;
        }
        let last = (self.moves_made - 1) % self.players.len();
        Some(&self.players[last])
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome<'_>> {
        if self.is_board_full() {
            Some(GameOutcome::Draw)
        } else if self.is_game_over() {
            self.winner().map(GameOutcome::Winner)
        } else {
            None
        }
    }

    /// The player occupying (`x`, `y`), with `y = 0` as the bottom row.
    pub fn cell_at(&self, x: usize, y: usize) -> Option<&Player> {
        let row = self
            .board
            .height()
            .checked_sub(y + 1)
            .unwrap_or_else(|| panic!("row index {y} out of bounds for height {}", self.board.height()));
        let token = match self.board.get(row, x) {
            super::Cell::Empty => return None,
            super::Cell::Token(token) => token,
        };
        self.players.iter().find(|p| p.token() == token)
    }

    /// The board as text: top row first, `.` for empty cells.
    pub fn render(&self) -> String {
        self.board.to_string()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}
