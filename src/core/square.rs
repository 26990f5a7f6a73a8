use std::fmt;

/// A board square identified by its 1-based id.
///
/// Ids are column-major: on an N×N board ids `1..=N` fill column 0 (rows 0..N),
/// ids `N+1..=2N` fill column 1, and so on. A `Square` carries no board size;
/// use [`crate::board::Board`] to validate an id or convert it to a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u16);

impl Square {
    /// Wrap a raw id without validation.
    ///
    /// Intended for boards that have already validated the id.
    #[inline]
    pub(crate) const fn from_id_unchecked(id: u16) -> Square {
        Square(id)
    }

    #[inline]
    pub fn id(self) -> u16 {
        self.0
    }

    /// Zero-based index, handy for dense per-square tables.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
