use std::{fmt, str::FromStr};

use glam::IVec2;

use crate::error::Error;

/// Board coordinate, `x` is the column and `y` the row.
pub type Pos = IVec2;

/// Scanrow index of a cell (or dot): `row * width + col`.
pub type CellIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Position of this side in a per-cell slot array.
    pub fn slot(self) -> usize {
        self as usize
    }

    pub fn opposite(self) -> Side {
        Side::ALL[(self.slot() + 2) % 4]
    }

    /// Unit step from a cell to the neighbor across this side.
    pub fn offset(self) -> Pos {
        match self {
            Side::Top => Pos::new(0, -1),
            Side::Right => Pos::new(1, 0),
            Side::Bottom => Pos::new(0, 1),
            Side::Left => Pos::new(-1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Side::ALL
            .into_iter()
            .find(|side| side.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownSide(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn pos(self) -> Pos {
        Pos::new(self.col as i32, self.row as i32)
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One side of one cell. Two aliases name every interior edge, see
/// [`crate::board::Board::canonical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub cell: CellPos,
    pub side: Side,
}

impl Edge {
    pub fn new(row: usize, col: usize, side: Side) -> Self {
        Self {
            cell: CellPos::new(row, col),
            side,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.cell.row, self.cell.col, self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_sides_pair_up() {
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
            assert_eq!(side.offset() + side.opposite().offset(), Pos::ZERO);
        }
        assert_eq!(Side::Top.opposite(), Side::Bottom);
        assert_eq!(Side::Left.opposite(), Side::Right);
    }

    #[test]
    fn sides_parse_by_name() {
        assert_eq!("top".parse::<Side>(), Ok(Side::Top));
        assert_eq!("Right".parse::<Side>(), Ok(Side::Right));
        assert_eq!(
            "middle".parse::<Side>(),
            Err(Error::UnknownSide("middle".to_owned()))
        );
        for side in Side::ALL {
            assert_eq!(side.to_string().parse::<Side>(), Ok(side));
        }
    }
}
