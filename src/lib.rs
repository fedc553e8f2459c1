//! Enclosure detection for a dots-and-boxes style grid.
//!
//! Two views of the same board are supported. In the cell model walls are drawn between
//! cells and every selection reports the cells it closed off from the board boundary. In
//! the dot model lines are drawn between lattice dots and every selection reports whether
//! it closed a cycle.

pub mod board;
pub mod cells;
pub mod data;
pub mod dots;
pub mod engine;
pub mod error;
pub mod region;
pub mod render;

pub use board::Board;
pub use cells::{CellGraph, EnclosureRule, Rules};
pub use data::{CellPos, Edge, Side};
pub use dots::DotGraph;
pub use engine::{CellGame, Closure, CycleCheck, DotGame, Engine, Outcome};
pub use error::Error;
