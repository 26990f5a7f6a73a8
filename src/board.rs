use crate::core::coord::Coord;
use crate::core::square::Square;
use crate::error::SquareError;

/// Largest supported board edge (one column letter per column).
pub const MAX_BOARD_SIZE: usize = 26;

/// The standard chessboard edge.
pub const STANDARD_SIZE: usize = 8;

/// An N×N board.
///
/// Owns the id ↔ coordinate bijection: `row = (id-1) mod N`,
/// `col = (id-1) div N`. Labels are a column letter followed by the 1-based
/// row, so on the standard board `a1` is 1, `b1` is 9 and `h8` is 64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    size: u16,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, SquareError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(SquareError::InvalidBoardSize { size });
        }
        Ok(Self { size: size as u16 })
    }

    pub fn standard() -> Self {
        Self {
            size: STANDARD_SIZE as u16,
        }
    }

    /// Edge length N.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Number of squares, N².
    pub fn square_count(&self) -> usize {
        self.size() * self.size()
    }

    /// Validate a raw id.
    pub fn square(&self, id: i64) -> Result<Square, SquareError> {
        let max = self.square_count() as u16;
        if id < 1 || id > max as i64 {
            return Err(SquareError::InvalidSquare { id, max });
        }
        Ok(Square::from_id_unchecked(id as u16))
    }

    pub fn contains(&self, sq: Square) -> bool {
        (1..=self.square_count()).contains(&(sq.id() as usize))
    }

    /// All squares in id order.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        (1..=self.square_count() as u16).map(Square::from_id_unchecked)
    }

    /// The coordinate for a square.
    pub fn coord_of(&self, sq: Square) -> Coord {
        debug_assert!(self.contains(sq));
        let n = self.size as i32;
        let i = sq.index() as i32;
        Coord::new(i % n, i / n)
    }

    /// Returns the square for this coordinate if it is on the board.
    pub fn sq_of(&self, coord: Coord) -> Option<Square> {
        let n = self.size as i32;
        if !coord.in_square(n) {
            return None;
        }
        Some(Square::from_id_unchecked((coord.col * n + coord.row + 1) as u16))
    }

    /// Human label, e.g. `"e4"`.
    pub fn label(&self, sq: Square) -> String {
        let c = self.coord_of(sq);
        let file = (b'a' + c.col as u8) as char;
        format!("{file}{}", c.row + 1)
    }

    /// Parse a label such as `"b1"` or `" H8 "`.
    pub fn parse_label(&self, label: &str) -> Result<Square, SquareError> {
        let invalid = || SquareError::InvalidLabel {
            label: label.to_string(),
        };

        let text = label.trim().to_ascii_lowercase();
        let mut chars = text.chars();
        let file = chars.next().ok_or_else(invalid)?;
        if !file.is_ascii_lowercase() {
            return Err(invalid());
        }
        let rank = chars.as_str();
        if rank.is_empty() || !rank.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let row: i32 = rank.parse().map_err(|_| invalid())?;

        let col = file as i32 - 'a' as i32;
        self.sq_of(Coord::new(row - 1, col)).ok_or_else(invalid)
    }

    /// Every label in id order.
    pub fn labels(&self) -> Vec<String> {
        self.squares().map(|sq| self.label(sq)).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
