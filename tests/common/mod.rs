#![allow(dead_code)]

use line_and_dot::{CellGame, CellPos, Closure, Edge, Engine, Side};

pub fn cell(row: usize, col: usize) -> CellPos {
    CellPos::new(row, col)
}

pub fn select(game: &mut CellGame, row: usize, col: usize, side: Side) -> Vec<CellPos> {
    game.select_edge(row, col, side)
        .map(|Closure { closed_cells }| closed_cells)
        .unwrap_or_else(|error| panic!("selecting {row} {col} {side} failed: {error}"))
}

/// The edges on the outside of the board, going round clockwise from the top left.
pub fn outer_ring(width: usize, height: usize) -> Vec<Edge> {
    let mut ring = Vec::new();
    ring.extend((0..width).map(|col| Edge::new(0, col, Side::Top)));
    ring.extend((0..height).map(|row| Edge::new(row, width - 1, Side::Right)));
    ring.extend((0..width).rev().map(|col| Edge::new(height - 1, col, Side::Bottom)));
    ring.extend((0..height).rev().map(|row| Edge::new(row, 0, Side::Left)));
    ring
}
