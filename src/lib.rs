//! Wolfram-automata evolves elementary cellular automata from a rule number.
//!
//! A 1-D automaton ([`Automaton1D`]) reads each cell together with its left and right
//! neighbor and looks the triple up in the 8-bit rule. A 2-D automaton ([`Automaton2D`])
//! counts the live cells among the 4 or 8 neighbors of a cell and looks the count and the
//! cell itself up in a `2 * (n + 1)` bit rule. Both only ever produce cells that are
//! exactly `0.0` or `1.0`, which the caller can map straight onto pixels.
//!
//! Rendering, input handling and argument parsing are left to the driver.

mod direction;
mod error;
mod grid;
mod neighborhood;
#[cfg(feature = "persist")]
mod persist;
mod row;

pub mod config;
pub mod rule;
pub mod rules;

pub use direction::*;
pub use error::*;
pub use grid::*;
pub use neighborhood::*;
#[cfg(feature = "persist")]
pub use persist::*;
pub use row::*;

use ndarray::{ArrayView1, ArrayView2};

/// A rule for a 1-D automaton.
///
/// This enforces that all new cells are only produced from the previous row. The
/// row passed in is never the one being written, so the update order cannot leak
/// into the result.
pub trait Rule1D {
    /// Whether cell `ix` is live in the next generation given the current `row`.
    fn alive(&self, ix: usize, row: ArrayView1<'_, f64>) -> bool;
}

impl<F> Rule1D for F
where
    F: Fn(usize, ArrayView1<'_, f64>) -> bool,
{
    #[inline]
    fn alive(&self, ix: usize, row: ArrayView1<'_, f64>) -> bool {
        self(ix, row)
    }
}

/// A rule for a 2-D automaton.
///
/// The rule sees the 3x3 window of the previous generation centered on the cell
/// being computed; the cell itself is at `(1, 1)`. Cells outside the grid are
/// padding and always read as `0.0`.
pub trait Rule2D {
    /// Whether the center of `window` is live in the next generation.
    fn alive(&self, window: ArrayView2<'_, f64>) -> bool;
}

impl<F> Rule2D for F
where
    F: Fn(ArrayView2<'_, f64>) -> bool,
{
    #[inline]
    fn alive(&self, window: ArrayView2<'_, f64>) -> bool {
        self(window)
    }
}

/// Convert a liveness decision into a stored cell value.
#[inline]
pub(crate) fn cell(alive: bool) -> f64 {
    if alive {
        1.0
    } else {
        0.0
    }
}
