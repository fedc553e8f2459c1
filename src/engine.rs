use std::fmt;

use crate::{
    board::Board,
    cells::{CellGraph, CellState, Rules},
    data::{CellPos, Side},
    dots::DotGraph,
    error::Error,
    render,
};

/// What a driver needs from one selection result.
pub trait Outcome: fmt::Display {
    /// Whether the selection closed anything off.
    fn closes(&self) -> bool;
}

/// One game session: a board and the edges selected on it so far.
pub trait Engine {
    type Outcome: Outcome;

    fn board(&self) -> &Board;

    fn select_edge(&mut self, row: usize, col: usize, side: Side)
        -> Result<Self::Outcome, Error>;

    fn render(&self) -> String;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closure {
    pub closed_cells: Vec<CellPos>,
}

impl Outcome for Closure {
    fn closes(&self) -> bool {
        !self.closed_cells.is_empty()
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.closed_cells.is_empty() {
            return f.write_str("no enclosure");
        }
        f.write_str("closed")?;
        for (i, cell) in self.closed_cells.iter().enumerate() {
            let separator = if i == 0 { " " } else { ", " };
            write!(f, "{separator}{cell}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleCheck {
    pub cycle_detected: bool,
}

impl Outcome for CycleCheck {
    fn closes(&self) -> bool {
        self.cycle_detected
    }
}

impl fmt::Display for CycleCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.cycle_detected {
            "cycle"
        } else {
            "no cycle"
        })
    }
}

/// Cell model: walls between cells, reporting enclosed cells.
pub struct CellGame {
    graph: CellGraph,
}

impl CellGame {
    pub fn initialize(width: usize, height: usize) -> Result<Self, Error> {
        Self::with_rules(width, height, Rules::default())
    }

    pub fn with_rules(width: usize, height: usize, rules: Rules) -> Result<Self, Error> {
        let board = Board::new(width, height)?;
        Ok(Self {
            graph: CellGraph::new(board, rules),
        })
    }

    pub fn graph(&self) -> &CellGraph {
        &self.graph
    }

    pub fn state(&self, cell: CellPos) -> Option<CellState> {
        self.graph
            .board()
            .index(cell)
            .map(|index| self.graph.state(index))
    }
}

impl Engine for CellGame {
    type Outcome = Closure;

    fn board(&self) -> &Board {
        self.graph.board()
    }

    fn select_edge(&mut self, row: usize, col: usize, side: Side) -> Result<Closure, Error> {
        let closed_cells = self.graph.select(CellPos::new(row, col), side)?;
        Ok(Closure { closed_cells })
    }

    fn render(&self) -> String {
        render::cells_to_string(&self.graph)
    }
}

/// Dot model: lines between lattice dots, reporting closed cycles.
pub struct DotGame {
    graph: DotGraph,
}

impl DotGame {
    pub fn initialize(width: usize, height: usize) -> Result<Self, Error> {
        Ok(Self {
            graph: DotGraph::build(width, height)?,
        })
    }

    pub fn graph(&self) -> &DotGraph {
        &self.graph
    }
}

impl Engine for DotGame {
    type Outcome = CycleCheck;

    fn board(&self) -> &Board {
        self.graph.board()
    }

    fn select_edge(&mut self, row: usize, col: usize, side: Side) -> Result<CycleCheck, Error> {
        let cycle_detected = self.graph.select(CellPos::new(row, col), side)?;
        Ok(CycleCheck { cycle_detected })
    }

    fn render(&self) -> String {
        render::dots_to_string(&self.graph)
    }
}
