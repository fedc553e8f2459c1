use std::collections::HashSet;

use log::{debug, info, trace};

use crate::{
    board::{Board, Neighbor},
    data::{CellIndex, CellPos, Edge, Side},
    error::Error,
};

pub type DotIndex = CellIndex;

/// Dots connected through the lines drawn so far.
pub struct DotGraph {
    board: Board,
    /// Per dot, the dots it has a drawn line to.
    lines: Vec<HashSet<DotIndex>>,
    line_count: usize,
}

impl DotGraph {
    pub fn new(board: Board) -> Self {
        info!(
            "Built dot graph for a {}x{} lattice",
            board.width(),
            board.height()
        );
        Self {
            board,
            lines: vec![HashSet::new(); board.len()],
            line_count: 0,
        }
    }

    pub fn build(width: usize, height: usize) -> Result<Self, Error> {
        Ok(Self::new(Board::lattice(width, height)?))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn lines_of(&self, dot: DotIndex) -> impl Iterator<Item = DotIndex> + '_ {
        self.lines[dot].iter().copied()
    }

    pub fn has_line(&self, a: DotIndex, b: DotIndex) -> bool {
        self.lines.get(a).is_some_and(|lines| lines.contains(&b))
    }

    pub fn is_drawn(&self, edge: Edge) -> bool {
        self.endpoints(edge.cell, edge.side)
            .is_ok_and(|(a, b)| self.has_line(a, b))
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.board.len()).all(|a| self.lines_of(a).all(|b| self.has_line(b, a)))
    }

    /// The two dots joined by the line leaving `dot` across `side`.
    pub fn endpoints(&self, dot: CellPos, side: Side) -> Result<(DotIndex, DotIndex), Error> {
        let start = self.board.reference(dot, side)?;
        match self.board.neighbor(dot, side) {
            Neighbor::Cell(end) => Ok((start, end)),
            Neighbor::Boundary(_) => Err(Error::InvalidReference {
                row: dot.row,
                col: dot.col,
                side,
            }),
        }
    }

    /// Whether `to` can be reached from `from` over drawn lines.
    pub fn has_path(&self, from: DotIndex, to: DotIndex) -> bool {
        let mut visited = vec![false; self.board.len()];
        let mut stack = vec![from];
        visited[from] = true;

        while let Some(dot) = stack.pop() {
            if dot == to {
                return true;
            }
            trace!("Visiting dot {}", self.board.position(dot));
            for &next in &self.lines[dot] {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        false
    }

    /// Whether a line from `start` to `end` would close a cycle. Must be asked before
    /// the line is inserted.
    pub fn introduces_cycle(&self, start: DotIndex, end: DotIndex) -> bool {
        self.has_path(end, start)
    }

    /// Draw a line between two dots by index, without requiring them to be lattice
    /// neighbors. Returns whether the line closed a cycle. A line drawn before is left
    /// as is and reports no cycle.
    pub fn link(&mut self, start: DotIndex, end: DotIndex) -> Result<bool, Error> {
        for dot in [start, end] {
            if dot >= self.board.len() {
                return Err(Error::UnknownDot(dot));
            }
        }
        if start == end {
            return Err(Error::SelfLoop(start));
        }
        if self.has_line(start, end) {
            debug!("Line {start}-{end} is already drawn");
            return Ok(false);
        }

        // A cycle is reported, the line goes in regardless.
        let cycle = self.introduces_cycle(start, end);
        self.lines[start].insert(end);
        self.lines[end].insert(start);
        self.line_count += 1;

        debug!("Drew line {start}-{end}, cycle: {cycle}");
        Ok(cycle)
    }

    /// Draw the line leaving `dot` across `side`.
    pub fn select(&mut self, dot: CellPos, side: Side) -> Result<bool, Error> {
        let (start, end) = self.endpoints(dot, side)?;
        let cycle = self.link(start, end)?;
        if cycle {
            info!("Line {side} of {dot} closed a cycle");
        }
        Ok(cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_starts_empty() {
        let graph = DotGraph::build(3, 4).unwrap();
        assert_eq!(graph.board().len(), 12);
        assert_eq!(graph.line_count(), 0);
        assert!((0..12).all(|dot| graph.lines_of(dot).count() == 0));
    }

    #[test]
    fn rejects_narrow_lattices() {
        assert!(matches!(
            DotGraph::build(1, 3),
            Err(Error::InvalidDimension { min: 2, .. })
        ));
    }

    #[test]
    fn triangle_closes_on_third_line() {
        let mut graph = DotGraph::build(2, 2).unwrap();
        assert_eq!(graph.link(0, 1), Ok(false));
        assert_eq!(graph.link(1, 2), Ok(false));
        assert_eq!(graph.link(2, 0), Ok(true));
        assert_eq!(graph.line_count(), 3);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn dot_zero_is_an_ordinary_dot() {
        let mut graph = DotGraph::build(3, 3).unwrap();
        graph.link(0, 1).unwrap();
        graph.link(0, 3).unwrap();
        assert!(graph.has_path(1, 3));
        assert!(graph.introduces_cycle(1, 3));
        assert!(!graph.introduces_cycle(1, 8));
    }

    #[test]
    fn redrawing_is_a_no_op() {
        let mut graph = DotGraph::build(2, 2).unwrap();
        assert_eq!(graph.select(CellPos::new(0, 0), Side::Right), Ok(false));
        assert_eq!(graph.select(CellPos::new(0, 1), Side::Left), Ok(false));
        assert_eq!(graph.line_count(), 1);
    }

    #[test]
    fn off_lattice_lines_are_rejected() {
        let mut graph = DotGraph::build(2, 2).unwrap();
        assert_eq!(
            graph.select(CellPos::new(0, 0), Side::Top),
            Err(Error::InvalidReference {
                row: 0,
                col: 0,
                side: Side::Top
            })
        );
        assert_eq!(graph.link(0, 4), Err(Error::UnknownDot(4)));
        assert_eq!(graph.link(2, 2), Err(Error::SelfLoop(2)));
    }
}
