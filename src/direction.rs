use enum_iterator::IntoEnumIterator;
use Direction::*;

/// One of the eight compass directions around a cell.
///
/// The variants rotate counter-clockwise starting from `Right`, so the even
/// variants are the orthogonal directions and the odd variants are the diagonals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IntoEnumIterator)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// All directions, counter-clockwise from `Right`.
    #[inline]
    pub fn all() -> <Direction as IntoEnumIterator>::Iterator {
        Direction::into_enum_iter()
    }

    /// The four orthogonal directions.
    #[inline]
    pub fn orthogonal() -> impl Iterator<Item = Direction> {
        Self::all().filter(|dir| !dir.is_diagonal())
    }

    /// The four diagonal directions.
    #[inline]
    pub fn diagonal() -> impl Iterator<Item = Direction> {
        Self::all().filter(|dir| dir.is_diagonal())
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        matches!(self, UpRight | UpLeft | DownLeft | DownRight)
    }

    /// The `(row, column)` offset of the neighbor in this direction.
    ///
    /// Rows grow downwards, matching the row-major layout of the grids.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Right => (0, 1),
            UpRight => (-1, 1),
            Up => (-1, 0),
            UpLeft => (-1, -1),
            Left => (0, -1),
            DownLeft => (1, -1),
            Down => (1, 0),
            DownRight => (1, 1),
        }
    }

    /// Index of the neighbor inside a 3x3 window centered on `(1, 1)`.
    #[inline]
    pub fn window_index(self) -> (usize, usize) {
        let (dy, dx) = self.delta();
        ((1 + dy) as usize, (1 + dx) as usize)
    }
}
