use std::collections::BTreeSet;

use log::{debug, info, trace};

use crate::{
    board::{Board, Neighbor},
    data::{CellIndex, CellPos, Edge, Side},
    error::Error,
    region::Region,
};

/// When a cell counts as enclosed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnclosureRule {
    /// Every cell of a region that no undrawn wall connects to the board boundary.
    #[default]
    Region,
    /// Only a cell with all four of its own walls drawn.
    Cell,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rules {
    pub enclosure: EnclosureRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Open,
    Enclosed,
}

/// Cells connected through the walls that are not drawn yet.
pub struct CellGraph {
    board: Board,
    rules: Rules,
    /// Per cell and side, what the undrawn wall there connects to. `None` once it is drawn.
    links: Vec<[Option<Neighbor>; 4]>,
    /// Cells already reported by [`CellGraph::select`]. Never reset.
    enclosed: Vec<bool>,
}

/// Functions for initialization of the graph.
impl CellGraph {
    pub fn new(board: Board, rules: Rules) -> Self {
        // No walls are drawn yet, every side connects to a cell or to the boundary.
        let links = board
            .iter_cells()
            .map(|cell| Side::ALL.map(|side| Some(board.neighbor(cell, side))))
            .collect();

        info!(
            "Built cell graph for a {}x{} board ({:?} enclosure)",
            board.width(),
            board.height(),
            rules.enclosure
        );
        Self {
            board,
            rules,
            links,
            enclosed: vec![false; board.len()],
        }
    }

    pub fn build(width: usize, height: usize) -> Result<Self, Error> {
        Ok(Self::new(Board::new(width, height)?, Rules::default()))
    }
}

impl CellGraph {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// The remaining adjacency set of a cell.
    pub fn links(&self, index: CellIndex) -> impl Iterator<Item = Neighbor> + '_ {
        self.links[index].iter().flatten().copied()
    }

    pub fn is_linked(&self, a: CellIndex, b: CellIndex) -> bool {
        self.links(a).any(|neighbor| neighbor == Neighbor::Cell(b))
    }

    pub fn is_drawn(&self, edge: Edge) -> bool {
        self.board
            .index(edge.cell)
            .is_some_and(|index| self.links[index][edge.side.slot()].is_none())
    }

    pub fn drawn_sides(&self, index: CellIndex) -> usize {
        self.links[index].iter().filter(|link| link.is_none()).count()
    }

    pub fn state(&self, index: CellIndex) -> CellState {
        if self.enclosed[index] {
            CellState::Enclosed
        } else {
            CellState::Open
        }
    }

    pub fn enclosed_count(&self) -> usize {
        self.enclosed.iter().filter(|enclosed| **enclosed).count()
    }

    /// Whether every cell-to-cell link has its counterpart.
    pub fn is_symmetric(&self) -> bool {
        (0..self.board.len()).all(|a| {
            self.links(a)
                .filter_map(Neighbor::cell)
                .all(|b| self.is_linked(b, a))
        })
    }
}

/// Selection and enclosure detection.
impl CellGraph {
    /// Draw the wall on `side` of `cell`, cutting the link from both cells it separates.
    /// Returns the cell index and what the wall used to connect it to, or `None` if the
    /// wall was drawn before.
    pub fn draw_wall(
        &mut self,
        cell: CellPos,
        side: Side,
    ) -> Result<Option<(CellIndex, Neighbor)>, Error> {
        let index = self.board.reference(cell, side)?;
        let Some(neighbor) = self.links[index][side.slot()].take() else {
            return Ok(None);
        };

        // A boundary wall has no cell on the other side.
        if let Neighbor::Cell(other) = neighbor {
            self.links[other][side.opposite().slot()] = None;
        }
        Ok(Some((index, neighbor)))
    }

    /// Collect the region reachable from `start` through undrawn walls, stopping at the
    /// first wall that leads off the board.
    pub fn close_from(&self, start: CellIndex) -> Region {
        match self.rules.enclosure {
            EnclosureRule::Region => self.flood_from(start),
            EnclosureRule::Cell => self.close_cell(start),
        }
    }

    fn flood_from(&self, start: CellIndex) -> Region {
        let mut cell_indices = BTreeSet::from([start]);
        let mut stack = Vec::with_capacity(self.board.len());
        stack.push(start);

        while let Some(index) = stack.pop() {
            trace!("Visiting cell {}", self.board.position(index));
            for side in Side::ALL {
                match self.links[index][side.slot()] {
                    None => {}
                    Some(Neighbor::Boundary(_)) => {
                        return Region {
                            cell_indices,
                            open_edge: Some((index, side)),
                        };
                    }
                    Some(Neighbor::Cell(next)) => {
                        // Revisits are fine, they only confirm a branch already queued.
                        if cell_indices.insert(next) {
                            stack.push(next);
                        }
                    }
                }
            }
        }

        Region {
            cell_indices,
            open_edge: None,
        }
    }

    fn close_cell(&self, start: CellIndex) -> Region {
        let open_edge = Side::ALL
            .into_iter()
            .find(|side| self.links[start][side.slot()].is_some())
            .map(|side| (start, side));
        Region {
            cell_indices: BTreeSet::from([start]),
            open_edge,
        }
    }

    /// Draw a wall and report the cells it newly encloses, in index order.
    pub fn select(&mut self, cell: CellPos, side: Side) -> Result<Vec<CellPos>, Error> {
        let Some((index, neighbor)) = self.draw_wall(cell, side)? else {
            debug!("Wall {side} of {cell} is already drawn");
            return Ok(Vec::new());
        };
        debug!("Drew wall {side} of {cell}");

        // Only the two cells beside the wall can have just been closed off. When both
        // lie in the same region one traversal covers them.
        let first = self.close_from(index);
        let second = neighbor
            .cell()
            .filter(|other| !first.contains(*other))
            .map(|other| self.close_from(other));
        debug!(
            "Region of {cell}: {} cells, closed: {}",
            first.size(),
            first.is_closed()
        );

        let mut closure = first.into_closure();
        if let Some(second) = second {
            closure.extend(second.into_closure());
        }
        closure.retain(|index| !self.enclosed[*index]);

        let closed = closure
            .into_iter()
            .map(|index| {
                self.enclosed[index] = true;
                self.board.position(index)
            })
            .collect::<Vec<_>>();

        if !closed.is_empty() {
            info!("Wall {side} of {cell} enclosed {} cells", closed.len());
        }
        Ok(closed)
    }
}
