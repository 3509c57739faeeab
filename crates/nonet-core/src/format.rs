//! Errors for the textual puzzle and cell-label formats.

/// An error describing malformed textual input.
///
/// These errors always originate from caller input (a puzzle grid or a cell
/// label) and are surfaced verbatim, including the offending text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FormatError {
    /// The grid did not have exactly 9 rows.
    #[display("need 9 rows, found {found}")]
    RowCount {
        /// Number of rows actually supplied.
        found: usize,
    },
    /// A row did not have exactly 9 cells.
    #[display("need 9 cells in row {row}: \"{text}\"")]
    RowLength {
        /// 1-based row number.
        row: usize,
        /// The raw row text.
        text: String,
    },
    /// A row contained a character that is neither a digit nor a blank marker.
    #[display("unrecognized character '{ch}' at row {row} col {col}: \"{text}\"")]
    UnrecognizedCharacter {
        /// The offending character.
        ch: char,
        /// 1-based row number.
        row: usize,
        /// 1-based column number.
        col: usize,
        /// The raw row text.
        text: String,
    },
    /// A cell label was not of the 4-character form `R<row>C<col>` with
    /// row and column in 1-9.
    #[display("cell label must be 4 characters R<row>C<col>: \"{label}\"")]
    CellLabel {
        /// The raw label text.
        label: String,
    },
}
