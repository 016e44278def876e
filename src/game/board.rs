use std::fmt;

/// Character printed for an unoccupied cell.
pub const EMPTY_SYMBOL: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Token(char),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The character this cell renders as.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Token(token) => token,
        }
    }
}

/// A `height` × `width` grid. Row 0 is the top, row `height - 1` the bottom.
///
/// Column arguments are trusted: an out-of-range column panics with an
/// index-out-of-bounds error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![vec![Cell::Empty; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Bounds-checked lookup with signed coordinates, for directional walks
    /// that step off the grid.
    pub fn probe(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cells.get(row)?.get(col).copied()
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        // Pieces stack from the bottom, so the top cell decides.
        match self.cells.first() {
            Some(top) => !top[col].is_empty(),
            None => {
                assert!(
                    col < self.width,
                    "column index {col} out of bounds for width {}",
                    self.width
                );
                true
            }
        }
    }

    /// Drop a token in a column, returns the row where it landed, or `None`
    /// if the column has no room left.
    pub fn drop_token(&mut self, col: usize, token: char) -> Option<usize> {
        if self.is_column_full(col) {
            return None;
        }

        // Find the lowest empty row in this column
        let row = (0..self.height)
            .rev()
            .find(|&row| self.cells[row][col].is_empty())?;
        self.cells[row][col] = Cell::Token(token);
        Some(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
