//! Board cell coordinates and human-facing cell labels.

use std::fmt::{self, Display};

use crate::FormatError;

/// A cell coordinate on the 9×9 board.
///
/// Rows and columns are 0-based internally. The `Ord` implementation is
/// row-major, which is the deterministic tie-break order used when several
/// forced moves are available.
///
/// # Examples
///
/// ```
/// use nonet_core::Cell;
///
/// let cell = Cell::new(2, 6);
/// assert_eq!(cell.label(), "R3C7");
/// assert_eq!(Cell::parse_label("R3C7").unwrap(), cell);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Array containing all 81 cells in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a cell from a 0-based row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "cell coordinates must be in 0..9");
        Self { row, col }
    }

    /// Returns the 0-based row.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the 0-based column.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of the 3×3 box containing this cell (0-8).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        3 * (self.row / 3) + self.col / 3
    }

    /// Returns the row-major index of this cell (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Creates a cell from a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81, "cell index must be in 0..81");
        #[expect(clippy::cast_possible_truncation)]
        let row = (index / 9) as u8;
        #[expect(clippy::cast_possible_truncation)]
        let col = (index % 9) as u8;
        Self { row, col }
    }

    /// Returns the human-facing label, e.g. `R3C7` for row 2, column 6.
    #[must_use]
    pub fn label(self) -> String {
        self.to_string()
    }

    /// Parses a 4-character cell label of the form `R<row>C<col>`.
    ///
    /// Row and column are 1-based, so `R1C1` is the top-left cell.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::CellLabel`] if the label is not exactly 4
    /// characters or the row/column is not a digit 1-9.
    pub fn parse_label(label: &str) -> Result<Self, FormatError> {
        let bad = || FormatError::CellLabel {
            label: label.to_owned(),
        };
        let chars: Vec<char> = label.chars().collect();
        if chars.len() != 4 {
            return Err(bad());
        }
        let row = chars[1].to_digit(10).filter(|d| (1..=9).contains(d));
        let col = chars[3].to_digit(10).filter(|d| (1..=9).contains(d));
        match (row, col) {
            #[expect(clippy::cast_possible_truncation)]
            (Some(row), Some(col)) => Ok(Self::new(row as u8 - 1, col as u8 - 1)),
            _ => Err(bad()),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row + 1, self.col + 1)
    }
}
