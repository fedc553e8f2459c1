use std::fmt;

use crate::data::{CellIndex, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The board is smaller than `min` along at least one axis.
    InvalidDimension {
        width: usize,
        height: usize,
        min: usize,
    },
    /// A selection names a cell outside the board, or (for dots) an edge with
    /// no second dot.
    InvalidReference { row: usize, col: usize, side: Side },
    /// A raw dot index outside the lattice.
    UnknownDot(CellIndex),
    /// A line from a dot to itself.
    SelfLoop(CellIndex),
    UnknownSide(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, min, .. } if width < min => {
                write!(f, "grid width must be at least {min}, got {width}")
            }
            Self::InvalidDimension { height, min, .. } => {
                write!(f, "grid height must be at least {min}, got {height}")
            }
            Self::InvalidReference { row, col, side } => {
                write!(f, "invalid edge: row {row}, col {col}, side {side}")
            }
            Self::UnknownDot(index) => write!(f, "no dot with index {index}"),
            Self::SelfLoop(index) => write!(f, "cannot draw a line from dot {index} to itself"),
            Self::UnknownSide(name) => {
                write!(f, "unknown side {name:?}, expected top, right, bottom or left")
            }
        }
    }
}

impl std::error::Error for Error {}
