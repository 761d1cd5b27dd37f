//! Hand-written rules that can be passed to [`Automaton1D::step`] and
//! [`Automaton2D::step_with`] instead of a rule number.
//!
//! [`Automaton1D::step`]: crate::Automaton1D::step
//! [`Automaton2D::step_with`]: crate::Automaton2D::step_with

use crate::{Neighborhood, Rule2D};
use ndarray::{ArrayView1, ArrayView2};

/// The new cell is the opposite of the cell above it.
pub fn invert(ix: usize, row: ArrayView1<'_, f64>) -> bool {
    row[ix] == 0.0
}

/// Live if any of the 8 surrounding cells is live.
#[derive(Copy, Clone, Debug, Default)]
pub struct AnyOfEight;

impl Rule2D for AnyOfEight {
    fn alive(&self, window: ArrayView2<'_, f64>) -> bool {
        Neighborhood::Moore.live_sum(window) >= 1
    }
}

/// Live if any of the 4 orthogonal neighbors is live.
#[derive(Copy, Clone, Debug, Default)]
pub struct AnyOfFour;

impl Rule2D for AnyOfFour {
    fn alive(&self, window: ArrayView2<'_, f64>) -> bool {
        Neighborhood::VonNeumann.live_sum(window) >= 1
    }
}

/// Live if exactly 1 or exactly 4 of the orthogonal neighbors are live.
#[derive(Copy, Clone, Debug, Default)]
pub struct OneOrFourOfFour;

impl Rule2D for OneOrFourOfFour {
    fn alive(&self, window: ArrayView2<'_, f64>) -> bool {
        matches!(Neighborhood::VonNeumann.live_sum(window), 1 | 4)
    }
}
