//! Error types for rule decoding and automaton construction.

use thiserror::Error;

/// Errors reported by the rule codec and the automata.
///
/// None of these are fatal to an automaton: a refused step leaves the cells and
/// the step counter exactly as they were.
#[derive(Debug, Error)]
pub enum Error {
    /// The neighbor count is neither 4 nor 8.
    #[error("invalid neighbor count {0}, expected 4 or 8")]
    InvalidNeighborCount(usize),

    /// The rule number does not fit the lookup table of its topology.
    #[error("rule number {rule} out of range, maximum is {max}")]
    RuleNumberOutOfRange {
        /// The offending rule number.
        rule: u32,
        /// Largest rule number accepted for the topology.
        max: u32,
    },

    /// A neighbor sum larger than the number of neighbors.
    #[error("neighbor sum {sum} exceeds neighbor count {max}")]
    NeighborSumOutOfRange {
        /// The offending sum.
        sum: usize,
        /// The neighbor count it was checked against.
        max: usize,
    },

    /// Caller-provided cells do not match the declared dimensions.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        /// Declared `(height, width)`, or `(1, width)` for rows.
        expected: (usize, usize),
        /// Shape of the provided cells.
        got: (usize, usize),
    },

    /// A grid or row with no cells.
    #[error("automaton must have at least one cell")]
    EmptyGrid,

    /// Failure while encoding or decoding persisted state.
    #[cfg(feature = "persist")]
    #[error("persistence error: {0}")]
    Persist(#[from] bincode::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
