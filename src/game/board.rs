pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Single-character glyph used by [`Board::render`]
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// A 6x7 Connect Four grid.
///
/// Row 0 is the top, row 5 is the bottom. `heights[c]` always equals the
/// number of discs in column `c`, and those discs sit in the bottom
/// `heights[c]` rows of the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    heights: [usize; COLS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropError {
    ColumnFull,
    InvalidColumn,
    EmptyDisc,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of discs stacked in a column (0 for out-of-range columns)
    pub fn column_height(&self, col: usize) -> usize {
        self.heights.get(col).copied().unwrap_or(0)
    }

    /// Whether a disc may be dropped in this column
    pub fn is_column_valid(&self, col: usize) -> bool {
        col < COLS && self.column_height(col) < ROWS
    }

    /// Columns that still accept a disc, left to right
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_column_valid(col)).collect()
    }

    /// Total discs on the board
    pub fn disc_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, DropError> {
        if cell == Cell::Empty {
            return Err(DropError::EmptyDisc);
        }
        if col >= COLS {
            return Err(DropError::InvalidColumn);
        }
        if self.heights[col] >= ROWS {
            return Err(DropError::ColumnFull);
        }

        // Discs fill from the bottom row up, so the landing row follows
        // directly from the column height.
        let row = ROWS - 1 - self.heights[col];
        debug_assert_eq!(self.cells[row][col], Cell::Empty);
        self.cells[row][col] = cell;
        self.heights[col] += 1;
        Ok(row)
    }

    /// Drop a piece, reporting only whether it was accepted.
    /// A rejected drop leaves the board untouched.
    pub fn place_disc(&mut self, col: usize, cell: Cell) -> bool {
        self.drop_piece(col, cell).is_ok()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h == ROWS)
    }

    /// Text snapshot: one line per row top to bottom, glyphs separated by
    /// spaces, followed by a blank line.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(ROWS * (COLS * 2 + 1) + 1);
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|cell| cell.glyph().to_string()).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
