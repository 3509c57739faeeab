//! Board state: placed digits, empty cells, and per-cell candidates.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Cell, CellSet, Digit, DigitSet, FormatError};

/// The mutable state of a puzzle board.
///
/// Holds the digit assignment, the set of empty cells, and the candidate set
/// of every empty cell. Candidates shrink monotonically between placements;
/// every placement resets them to the full digit range, after which the
/// elimination techniques recompute them from scratch.
///
/// # Examples
///
/// ```
/// use nonet_core::{Board, Cell, Digit};
///
/// let board = Board::from_rows(&[
///     "53..7....",
///     "6..195...",
///     ".98....6.",
///     "8...6...3",
///     "4..8.3..1",
///     "7...2...6",
///     ".6....28.",
///     "...419..5",
///     "....8..79",
/// ])?;
///
/// assert_eq!(board.digit_at(Cell::new(0, 0)), Some(Digit::D5));
/// assert!(!board.is_complete());
/// # Ok::<(), nonet_core::FormatError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    assignment: [Option<Digit>; 81],
    empty_cells: CellSet,
    candidates: [DigitSet; 81],
}

impl Board {
    /// Parses a board from 9 rows of 9 characters.
    ///
    /// Each character is a digit `'1'`-`'9'` or a blank marker (`' '` or
    /// `'.'`).
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] identifying the offending row (and column,
    /// for an unrecognized character) together with the raw row text.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, FormatError> {
        if rows.len() != 9 {
            return Err(FormatError::RowCount { found: rows.len() });
        }
        let mut assignment = [None; 81];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != 9 {
                return Err(FormatError::RowLength {
                    row: r + 1,
                    text: row.to_owned(),
                });
            }
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    ' ' | '.' => {}
                    '1'..='9' => {
                        assignment[r * 9 + c] = Digit::try_from_char(ch);
                    }
                    _ => {
                        return Err(FormatError::UnrecognizedCharacter {
                            ch,
                            row: r + 1,
                            col: c + 1,
                            text: row.to_owned(),
                        });
                    }
                }
            }
        }

        let empty_cells = Cell::ALL
            .iter()
            .filter(|cell| assignment[cell.index()].is_none())
            .copied()
            .collect();
        let mut board = Self {
            assignment,
            empty_cells,
            candidates: [DigitSet::EMPTY; 81],
        };
        board.reset_candidates();
        Ok(board)
    }

    /// Renders the board as 9 rows of 9 characters, with `'.'` for blanks.
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        (0..9)
            .map(|r| {
                (0..9)
                    .map(|c| {
                        self.assignment[r * 9 + c].map_or('.', Digit::to_char)
                    })
                    .collect()
            })
            .collect()
    }

    /// Returns the digit placed at a cell, or `None` if the cell is empty.
    #[must_use]
    pub const fn digit_at(&self, cell: Cell) -> Option<Digit> {
        self.assignment[cell.index()]
    }

    /// Returns the set of empty cells.
    #[must_use]
    pub const fn empty_cells(&self) -> CellSet {
        self.empty_cells
    }

    /// Returns the candidate set of a cell.
    ///
    /// Placed cells have an empty candidate set.
    #[must_use]
    pub const fn candidates_at(&self, cell: Cell) -> DigitSet {
        self.candidates[cell.index()]
    }

    /// Returns the union of the candidate sets over a set of cells.
    #[must_use]
    pub fn candidates_over(&self, cells: CellSet) -> DigitSet {
        cells
            .iter()
            .fold(DigitSet::EMPTY, |acc, cell| acc | self.candidates_at(cell))
    }

    /// Returns the digits already placed within a set of cells.
    #[must_use]
    pub fn placed_in(&self, cells: CellSet) -> DigitSet {
        cells
            .iter()
            .filter_map(|cell| self.digit_at(cell))
            .collect()
    }

    /// Removes candidate digits from a cell, returning the digits actually
    /// removed.
    ///
    /// Removing digits that are not present is a no-op, so repeated removal
    /// is idempotent.
    pub fn remove_candidates(&mut self, cell: Cell, digits: DigitSet) -> DigitSet {
        let removed = self.candidates[cell.index()] & digits;
        self.candidates[cell.index()] -= digits;
        removed
    }

    /// Places a digit at an empty cell and resets all candidate sets to the
    /// full digit range.
    ///
    /// Consistency with the groups is the caller's responsibility; the move
    /// deriver only ever proposes logically-forced digits.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already placed.
    pub fn place(&mut self, cell: Cell, digit: Digit) {
        assert!(
            self.empty_cells.contains(cell),
            "cell {cell} is already placed"
        );
        self.assignment[cell.index()] = Some(digit);
        self.empty_cells.remove(cell);
        self.reset_candidates();
    }

    /// Returns `true` if every cell is placed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.empty_cells.is_empty()
    }

    fn reset_candidates(&mut self) {
        for cell in Cell::ALL {
            self.candidates[cell.index()] = if self.empty_cells.contains(cell) {
                DigitSet::FULL
            } else {
                DigitSet::EMPTY
            };
        }
    }
}

impl FromStr for Board {
    type Err = FormatError;

    /// Parses a board from newline-separated rows.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().collect();
        Self::from_rows(&rows)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: [&str; 9] = [
        "53..7....",
        "6..195...",
        ".98....6.",
        "8...6...3",
        "4..8.3..1",
        "7...2...6",
        ".6....28.",
        "...419..5",
        "....8..79",
    ];

    #[test]
    fn test_parse_counts_blanks_and_digits() {
        let board = Board::from_rows(&CLASSIC).unwrap();
        assert_eq!(board.empty_cells().len(), 51);
        assert_eq!(board.digit_at(Cell::new(0, 4)), Some(Digit::D7));
        assert_eq!(board.digit_at(Cell::new(0, 2)), None);
    }

    #[test]
    fn test_space_and_dot_are_both_blanks() {
        let board = Board::from_rows(&[
            " 9   4 7 ",
            " 7 3  9 8",
            ".........",
            "      5  ",
            "   8     ",
            "         ",
            "5    6  9",
            " 3  41   ",
            "    7    ",
        ])
        .unwrap();
        assert_eq!(board.digit_at(Cell::new(0, 1)), Some(Digit::D9));
        assert_eq!(board.digit_at(Cell::new(2, 0)), None);
    }

    #[test]
    fn test_rejects_wrong_row_count() {
        assert_eq!(
            Board::from_rows(&CLASSIC[..5]),
            Err(FormatError::RowCount { found: 5 })
        );
    }

    #[test]
    fn test_rejects_wrong_row_length() {
        let mut rows = CLASSIC.to_vec();
        rows[3] = "8...6...";
        assert_eq!(
            Board::from_rows(&rows),
            Err(FormatError::RowLength {
                row: 4,
                text: "8...6...".to_owned(),
            })
        );
    }

    #[test]
    fn test_rejects_unrecognized_character() {
        let mut rows = CLASSIC.to_vec();
        rows[2] = ".98...x6.";
        let err = Board::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            FormatError::UnrecognizedCharacter {
                ch: 'x',
                row: 3,
                col: 7,
                text: ".98...x6.".to_owned(),
            }
        );
        assert_eq!(
            err.to_string(),
            "unrecognized character 'x' at row 3 col 7: \".98...x6.\""
        );
    }

    #[test]
    fn test_round_trip() {
        let board = Board::from_rows(&CLASSIC).unwrap();
        assert_eq!(board.to_rows(), CLASSIC.to_vec());
    }

    #[test]
    fn test_place_resets_candidates() {
        let mut board = Board::from_rows(&CLASSIC).unwrap();
        let cell = Cell::new(0, 2);
        board.remove_candidates(cell, DigitSet::from_iter([Digit::D1, Digit::D2]));
        assert_eq!(board.candidates_at(cell).len(), 7);

        board.place(Cell::new(4, 4), Digit::D5);
        assert_eq!(board.candidates_at(cell), DigitSet::FULL);
        assert_eq!(board.candidates_at(Cell::new(4, 4)), DigitSet::EMPTY);
        assert!(!board.empty_cells().contains(Cell::new(4, 4)));
    }

    #[test]
    fn test_remove_candidates_is_idempotent() {
        let mut board = Board::from_rows(&CLASSIC).unwrap();
        let cell = Cell::new(0, 2);
        let digits = DigitSet::from_iter([Digit::D3, Digit::D5]);
        assert_eq!(board.remove_candidates(cell, digits), digits);
        assert_eq!(board.remove_candidates(cell, digits), DigitSet::EMPTY);
    }

    #[test]
    fn test_placed_in_and_candidates_over() {
        let board = Board::from_rows(&CLASSIC).unwrap();
        let row0: CellSet = Cell::ALL.iter().filter(|c| c.row() == 0).copied().collect();
        assert_eq!(
            board.placed_in(row0),
            DigitSet::from_iter([Digit::D3, Digit::D5, Digit::D7])
        );
        assert_eq!(board.candidates_over(row0), DigitSet::FULL);
    }

    #[test]
    fn test_from_str() {
        let board: Board = CLASSIC.join("\n").parse().unwrap();
        assert_eq!(board.to_rows(), CLASSIC.to_vec());
    }
}
