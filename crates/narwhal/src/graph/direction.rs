//! Edge direction selector.
//!
//! Directed graphs keep two adjacency sets per vertex. Undirected graphs keep one and mirror
//! every edge into it, so both directions resolve to the same set.

use super::IndexSet;
use super::entries::VertexEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::graph) enum Direction {
    Out,
    In,
}

impl Direction {
    pub(in crate::graph) fn reverse(self) -> Self {
        match self {
            Direction::Out => Direction::In,
            Direction::In => Direction::Out,
        }
    }

    /// The adjacency set this direction reads on a graph with the given directedness.
    pub(in crate::graph) fn set<V, W>(
        self,
        entry: &VertexEntry<V, W>,
        directed: bool,
    ) -> &IndexSet<usize> {
        match (self, directed) {
            (Direction::In, true) => &entry.in_,
            _ => &entry.out,
        }
    }

    pub(in crate::graph) fn set_mut<V, W>(
        self,
        entry: &mut VertexEntry<V, W>,
        directed: bool,
    ) -> &mut IndexSet<usize> {
        match (self, directed) {
            (Direction::In, true) => &mut entry.in_,
            _ => &mut entry.out,
        }
    }
}
