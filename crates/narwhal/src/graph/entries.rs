//! Internal storage entries for [`Graph`](super::Graph).

use super::{HashMap, IndexSet};

/// One arena slot. Neighbours are referenced by slot index, never by value.
#[derive(Debug, Clone)]
pub(in crate::graph) struct VertexEntry<V, W> {
    pub(in crate::graph) value: V,
    pub(in crate::graph) out: IndexSet<usize>,
    /// Only populated for directed graphs.
    pub(in crate::graph) in_: IndexSet<usize>,
    /// Only populated for weighted graphs.
    pub(in crate::graph) weights: HashMap<usize, W>,
}

impl<V, W> VertexEntry<V, W> {
    pub(in crate::graph) fn new(value: V) -> Self {
        Self {
            value,
            out: IndexSet::default(),
            in_: IndexSet::default(),
            weights: HashMap::default(),
        }
    }
}
