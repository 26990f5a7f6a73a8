use std::ops::{Add, Neg, Sub};

/// A `(row, col)` board coordinate.
///
/// Signed so that knight offsets can be applied before the board bounds are
/// checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// True if both components lie in `[0, size)`.
    #[inline]
    pub fn in_square(self, size: i32) -> bool {
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// True if `self` is a permutation of `(±1, ±2)`.
    #[inline]
    pub fn is_knight_step(self) -> bool {
        let (r, c) = (self.row.abs(), self.col.abs());
        (r == 1 && c == 2) || (r == 2 && c == 1)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Self::Output {
        Coord::new(-self.row, -self.col)
    }
}

/// The 8 knight steps around the origin.
pub const KNIGHT_STEPS: [Coord; 8] = [
    Coord { row: -1, col: -2 },
    Coord { row: -2, col: -1 },
    Coord { row: -2, col: 1 },
    Coord { row: -1, col: 2 },
    Coord { row: 1, col: -2 },
    Coord { row: 2, col: -1 },
    Coord { row: 2, col: 1 },
    Coord { row: 1, col: 2 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_steps_are_closed_under_negation() {
        for step in KNIGHT_STEPS {
            assert!(step.is_knight_step());
            assert!(KNIGHT_STEPS.contains(&-step));
        }
    }

    #[test]
    fn king_and_rook_steps_are_not_knight_steps() {
        assert!(!Coord::new(1, 1).is_knight_step());
        assert!(!Coord::new(0, 2).is_knight_step());
        assert!(!Coord::new(2, 2).is_knight_step());
        assert!(!Coord::ORIGIN.is_knight_step());
    }
}
