use std::collections::BTreeSet;

use crate::data::{CellIndex, Side};

/// The cells one traversal reached from its start cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub cell_indices: BTreeSet<CellIndex>,
    /// First undrawn side found leading out of the region, if any.
    pub open_edge: Option<(CellIndex, Side)>,
}

impl Region {
    pub fn size(&self) -> usize {
        self.cell_indices.len()
    }

    pub fn is_closed(&self) -> bool {
        self.open_edge.is_none()
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        self.cell_indices.contains(&index)
    }

    /// The reached cells when the region is closed, nothing otherwise.
    pub fn into_closure(self) -> BTreeSet<CellIndex> {
        if self.is_closed() {
            self.cell_indices
        } else {
            BTreeSet::new()
        }
    }
}
