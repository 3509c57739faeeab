use nonet_core::Contradiction;

/// An error raised while deriving or applying forced moves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// A cell was forced to two different digits by independent derivations.
    #[display("inconsistent board: {_0}")]
    Inconsistent(Contradiction),
}

impl SolverError {
    /// Returns the underlying contradiction.
    #[must_use]
    pub const fn contradiction(self) -> Contradiction {
        match self {
            Self::Inconsistent(contradiction) => contradiction,
        }
    }
}
