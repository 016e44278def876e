//! Win detection by offset sampling.
//!
//! For a candidate cell the scan probes `target` fixed offsets along each of
//! five directions and counts how many of them hold the candidate's token.
//! Probes that fall off the board or hit another token are skipped; they do
//! not end the walk. A direction whose count equals `target` is a win.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::board::{Board, Cell};

/// Which row the west/east probes read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HorizontalScan {
    /// Horizontal probes always read the bottom row, whatever the
    /// candidate's own row. This is the classic behaviour of the game.
    #[default]
    BottomRow,
    /// Horizontal probes read the candidate's own row.
    CandidateRow,
}

impl HorizontalScan {
    fn anchor_row(self, board: &Board, row: usize) -> usize {
        match self {
            HorizontalScan::BottomRow => board.height().saturating_sub(1),
            HorizontalScan::CandidateRow => row,
        }
    }
}

impl fmt::Display for HorizontalScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HorizontalScan::BottomRow => "bottom-row",
            HorizontalScan::CandidateRow => "candidate-row",
        })
    }
}

impl FromStr for HorizontalScan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bottom-row" => Ok(HorizontalScan::BottomRow),
            "candidate-row" => Ok(HorizontalScan::CandidateRow),
            other => Err(format!(
                "unknown horizontal scan '{other}' (expected 'bottom-row' or 'candidate-row')"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    West,
    East,
    North,
    NorthEast,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::NorthEast,
        Direction::NorthWest,
    ];

    /// Column and row delta for one step. North is towards row 0.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    fn is_horizontal(self) -> bool {
        matches!(self, Direction::West | Direction::East)
    }
}

/// Per-direction match counts for one candidate cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionCounts {
    pub west: usize,
    pub east: usize,
    pub north: usize,
    pub north_east: usize,
    pub north_west: usize,
}

impl DirectionCounts {
    pub fn get(&self, direction: Direction) -> usize {
        match direction {
            Direction::West => self.west,
            Direction::East => self.east,
            Direction::North => self.north,
            Direction::NorthEast => self.north_east,
            Direction::NorthWest => self.north_west,
        }
    }

    fn get_mut(&mut self, direction: Direction) -> &mut usize {
        match direction {
            Direction::West => &mut self.west,
            Direction::East => &mut self.east,
            Direction::North => &mut self.north,
            Direction::NorthEast => &mut self.north_east,
            Direction::NorthWest => &mut self.north_west,
        }
    }

    /// The first direction whose count is exactly `target`.
    pub fn reaching(&self, target: usize) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.get(direction) == target)
    }
}

/// Count token matches at offsets `0..target` from the cell at
/// (`col`, `row`) in each of the five directions. An empty candidate yields
/// all zeros.
pub fn direction_counts(
    board: &Board,
    col: usize,
    row: usize,
    target: usize,
    horizontal: HorizontalScan,
) -> DirectionCounts {
    let mut counts = DirectionCounts::default();
    let token = board.get(row, col);
    if token == Cell::Empty {
        return counts;
    }

    let anchor = horizontal.anchor_row(board, row) as isize;
    for direction in Direction::ALL {
        let (dc, dr) = direction.step();
        let start_row = if direction.is_horizontal() {
            anchor
        } else {
            row as isize
        };
        for k in 0..target as isize {
            if board.probe(start_row + dr * k, col as isize + dc * k) == Some(token) {
                *counts.get_mut(direction) += 1;
            }
        }
    }
    counts
}

/// A cell that completes a run, with the direction it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningCell {
    pub col: usize,
    pub row: usize,
    pub direction: Direction,
}

/// Scan every cell, bottom row first and left to right within a row, and
/// return the first one with a direction count equal to `target`.
pub fn find_win(board: &Board, target: usize, horizontal: HorizontalScan) -> Option<WinningCell> {
    for row in (0..board.height()).rev() {
        for col in 0..board.width() {
            let counts = direction_counts(board, col, row, target, horizontal);
            if let Some(direction) = counts.reaching(target) {
                trace!(col, row, ?direction, ?counts, "run found");
                return Some(WinningCell { col, row, direction });
            }
        }
    }
    None
}
