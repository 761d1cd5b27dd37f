use crate::{Direction, Error};
use enum_iterator::IntoEnumIterator;
use ndarray::ArrayView2;
use std::convert::TryFrom;

/// The set of neighbors summed around a cell of a 2-D automaton.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IntoEnumIterator)]
#[cfg_attr(feature = "persist", derive(serde::Serialize, serde::Deserialize))]
pub enum Neighborhood {
    /// The 4 orthogonal neighbors.
    VonNeumann,
    /// The 4 orthogonal and the 4 diagonal neighbors.
    Moore,
}

impl Neighborhood {
    /// Iterate over both neighborhoods.
    pub fn all() -> <Neighborhood as IntoEnumIterator>::Iterator {
        Neighborhood::into_enum_iter()
    }

    /// Number of neighbors around the center, 4 or 8.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Neighborhood::VonNeumann => 4,
            Neighborhood::Moore => 8,
        }
    }

    /// The directions whose cells contribute to the neighbor sum.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        let diagonals = match self {
            Neighborhood::VonNeumann => 0,
            Neighborhood::Moore => 4,
        };
        Direction::orthogonal().chain(Direction::diagonal().take(diagonals))
    }

    /// Number of live neighbors around the center of a 3x3 window.
    ///
    /// Any non-zero cell counts as live.
    #[inline]
    pub fn live_sum(self, window: ArrayView2<'_, f64>) -> usize {
        self.directions()
            .filter(|dir| window[dir.window_index()] != 0.0)
            .count()
    }
}

impl TryFrom<usize> for Neighborhood {
    type Error = Error;

    fn try_from(count: usize) -> Result<Self, Error> {
        match count {
            4 => Ok(Neighborhood::VonNeumann),
            8 => Ok(Neighborhood::Moore),
            n => Err(Error::InvalidNeighborCount(n)),
        }
    }
}
