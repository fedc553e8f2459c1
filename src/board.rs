use crate::{
    data::{CellIndex, CellPos, Edge, Pos, Side},
    error::Error,
};

pub const MIN_BOARD_WIDTH: usize = 1;
pub const MIN_BOARD_HEIGHT: usize = 1;
/// Minimum dots per axis of a lattice, anything smaller has no line to draw.
pub const MIN_DOT_SPAN: usize = 2;

/// Which way a neighbor lookup fell off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Above the first row or below the last one.
    Row,
    /// Left of the first column or right of the last one.
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Neighbor {
    Cell(CellIndex),
    Boundary(Boundary),
}

impl Neighbor {
    pub fn cell(self) -> Option<CellIndex> {
        match self {
            Neighbor::Cell(index) => Some(index),
            Neighbor::Boundary(_) => None,
        }
    }
}

/// Dimensions of a rectangular grid of cells or dots, and the index arithmetic on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
}

/// Construction.
impl Board {
    /// A board of `width` by `height` cells.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width < MIN_BOARD_WIDTH {
            return Err(Error::InvalidDimension {
                width,
                height,
                min: MIN_BOARD_WIDTH,
            });
        }
        if height < MIN_BOARD_HEIGHT {
            return Err(Error::InvalidDimension {
                width,
                height,
                min: MIN_BOARD_HEIGHT,
            });
        }
        Ok(Self { width, height })
    }

    /// A lattice of `width` by `height` dots.
    pub fn lattice(width: usize, height: usize) -> Result<Self, Error> {
        if width < MIN_DOT_SPAN || height < MIN_DOT_SPAN {
            return Err(Error::InvalidDimension {
                width,
                height,
                min: MIN_DOT_SPAN,
            });
        }
        Ok(Self { width, height })
    }

    /// Compute the index of `pos` in a scanrow layout of `size`.
    fn key_function(size: Pos, pos: Pos) -> Option<CellIndex> {
        let valid_s = pos.x >= 0 && pos.x < size.x;
        let valid_t = pos.y >= 0 && pos.y < size.y;
        (valid_s && valid_t).then(|| (pos.y * size.x + pos.x) as CellIndex)
    }
}

impl Board {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Pos {
        Pos::new(self.width as i32, self.height as i32)
    }

    /// Number of cells (or dots).
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, cell: CellPos) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    pub fn index(&self, cell: CellPos) -> Option<CellIndex> {
        self.contains(cell)
            .then(|| cell.row * self.width + cell.col)
    }

    /// Index of `cell`, or `InvalidReference` for the selection that named it.
    pub fn reference(&self, cell: CellPos, side: Side) -> Result<CellIndex, Error> {
        self.index(cell).ok_or(Error::InvalidReference {
            row: cell.row,
            col: cell.col,
            side,
        })
    }

    pub fn position(&self, index: CellIndex) -> CellPos {
        CellPos::new(index / self.width, index % self.width)
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        (0..self.len()).map(|index| self.position(index))
    }

    /// What lies across `side` of `cell`. Off-board lookups name the axis they left by.
    pub fn neighbor(&self, cell: CellPos, side: Side) -> Neighbor {
        let pos = cell.pos() + side.offset();
        match Board::key_function(self.size(), pos) {
            Some(index) => Neighbor::Cell(index),
            None if pos.y < 0 || pos.y >= self.size().y => Neighbor::Boundary(Boundary::Row),
            None => Neighbor::Boundary(Boundary::Column),
        }
    }

    /// Interior bottom and right edges are stored as the top and left of the next cell over.
    pub fn canonical(&self, edge: Edge) -> Edge {
        let Edge { cell, side } = edge;
        match side {
            Side::Bottom if cell.row + 1 < self.height => {
                Edge::new(cell.row + 1, cell.col, Side::Top)
            }
            Side::Right if cell.col + 1 < self.width => Edge::new(cell.row, cell.col + 1, Side::Left),
            _ => edge,
        }
    }

    /// Every distinct edge of a cell board in canonical form: top and left of each cell,
    /// plus the right of the last column and the bottom of the last row.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.iter_cells().flat_map(move |cell| {
            let last_col = cell.col + 1 == self.width;
            let last_row = cell.row + 1 == self.height;
            Side::ALL
                .into_iter()
                .filter(move |side| match side {
                    Side::Top | Side::Left => true,
                    Side::Right => last_col,
                    Side::Bottom => last_row,
                })
                .map(move |side| Edge { cell, side })
        })
    }

    /// Every line of a dot lattice in canonical form.
    pub fn lines(&self) -> impl Iterator<Item = Edge> + '_ {
        self.iter_cells().flat_map(|cell| {
            [Side::Top, Side::Left]
                .into_iter()
                .filter(move |side| match side {
                    Side::Top => cell.row > 0,
                    _ => cell.col > 0,
                })
                .map(move |side| Edge { cell, side })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_small_boards() {
        assert_eq!(
            Board::new(0, 3),
            Err(Error::InvalidDimension {
                width: 0,
                height: 3,
                min: 1
            })
        );
        assert!(Board::new(3, 0).is_err());
        assert!(Board::new(1, 1).is_ok());

        assert!(Board::lattice(1, 5).is_err());
        assert!(Board::lattice(5, 1).is_err());
        assert!(Board::lattice(2, 2).is_ok());
    }

    #[test]
    fn indexes_in_scanrow_order() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(board.len(), 12);
        assert_eq!(board.index(CellPos::new(0, 0)), Some(0));
        assert_eq!(board.index(CellPos::new(2, 1)), Some(9));
        assert_eq!(board.index(CellPos::new(3, 0)), None);
        assert_eq!(board.index(CellPos::new(0, 4)), None);
        for index in 0..board.len() {
            assert_eq!(board.index(board.position(index)), Some(index));
        }
    }

    #[test]
    fn neighbors_distinguish_boundaries() {
        let board = Board::new(3, 2).unwrap();
        let corner = CellPos::new(0, 0);
        assert_eq!(board.neighbor(corner, Side::Right), Neighbor::Cell(1));
        assert_eq!(board.neighbor(corner, Side::Bottom), Neighbor::Cell(3));
        assert_eq!(
            board.neighbor(corner, Side::Top),
            Neighbor::Boundary(Boundary::Row)
        );
        assert_eq!(
            board.neighbor(corner, Side::Left),
            Neighbor::Boundary(Boundary::Column)
        );

        let far = CellPos::new(1, 2);
        assert_eq!(
            board.neighbor(far, Side::Bottom),
            Neighbor::Boundary(Boundary::Row)
        );
        assert_eq!(
            board.neighbor(far, Side::Right),
            Neighbor::Boundary(Boundary::Column)
        );
    }

    #[test]
    fn canonical_edges_fold_aliases() {
        let board = Board::new(2, 2).unwrap();
        assert_eq!(
            board.canonical(Edge::new(0, 0, Side::Bottom)),
            Edge::new(1, 0, Side::Top)
        );
        assert_eq!(
            board.canonical(Edge::new(0, 0, Side::Right)),
            Edge::new(0, 1, Side::Left)
        );
        assert_eq!(
            board.canonical(Edge::new(1, 1, Side::Bottom)),
            Edge::new(1, 1, Side::Bottom)
        );
        for edge in board.edges() {
            assert_eq!(board.canonical(edge), edge);
        }
    }

    #[test]
    fn edge_counts() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(board.edges().count(), 2 * 4 * 3 + 4 + 3);

        let lattice = Board::lattice(4, 3).unwrap();
        assert_eq!(lattice.lines().count(), 2 * 4 * 3 - 4 - 3);
    }
}
