//! Edge density and minimum spanning forests.

use super::Graph;
use super::direction::Direction;
use crate::dsu::DisjointSetUnion;
use crate::heap::BinaryHeap;
use crate::weight::{Weight, cmp_weights};
use std::cmp::Ordering;
use std::hash::Hash;

/// Graphs at or above this density pick Prim in [`Graph::mst`].
const DENSE_THRESHOLD: f64 = 0.5;

/// One edge of a spanning forest.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningEdge<V, W> {
    pub from: V,
    pub to: V,
    pub weight: W,
}

impl<V, W> Graph<V, W> {
    /// Number of edges, counting each undirected edge once.
    pub fn total_edges(&self) -> usize {
        self.edges().count()
    }

    /// Edges present relative to the maximum a simple graph of this size can hold.
    pub fn density(&self) -> f64 {
        let vertices = self.len() as f64;
        if vertices < 2.0 {
            return 0.0;
        }
        let mut max_edges = vertices * (vertices - 1.0);
        if !self.options.directed {
            max_edges /= 2.0;
        }
        self.total_edges() as f64 / max_edges
    }

    pub fn is_dense(&self) -> bool {
        self.density() >= DENSE_THRESHOLD
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Minimum spanning forest, one tree per connected component.
    ///
    /// Dense graphs go through [`Graph::mst_prim`], sparse ones through
    /// [`Graph::mst_kruskal`]. Directed graphs have no spanning forest in this sense and
    /// yield an empty list.
    pub fn mst(&self) -> Vec<SpanningEdge<V, W>> {
        if self.is_dense() {
            tracing::debug!(density = self.density(), "mst: using prim");
            self.mst_prim()
        } else {
            tracing::debug!(density = self.density(), "mst: using kruskal");
            self.mst_kruskal()
        }
    }

    /// Prim's algorithm, restarted from the first unvisited vertex of every component.
    pub fn mst_prim(&self) -> Vec<SpanningEdge<V, W>> {
        if self.options.directed {
            tracing::debug!("mst requested on a directed graph");
            return Vec::new();
        }
        let mut forest = Vec::new();
        let mut in_tree = self.visit_marks();
        let mut frontier = BinaryHeap::new(|a: &(W, usize, usize), b: &(W, usize, usize)| {
            cmp_weights(&a.0, &b.0)
        });

        for (root, _) in self.live() {
            if in_tree[root] {
                continue;
            }
            in_tree[root] = true;
            self.push_frontier(&mut frontier, root, &in_tree);
            while let Some((weight, from, to)) = frontier.pop() {
                if in_tree[to] {
                    continue;
                }
                in_tree[to] = true;
                if let Some(edge) = self.spanning_edge(from, to, weight) {
                    forest.push(edge);
                }
                self.push_frontier(&mut frontier, to, &in_tree);
            }
        }
        forest
    }

    /// Kruskal's algorithm over the edges sorted by weight.
    pub fn mst_kruskal(&self) -> Vec<SpanningEdge<V, W>> {
        if self.options.directed {
            tracing::debug!("mst requested on a directed graph");
            return Vec::new();
        }
        let mut candidates: Vec<(W, usize, usize)> = Vec::new();
        for (from, entry) in self.live() {
            for &to in &entry.out {
                if to > from {
                    candidates.push((self.edge_cost(from, to), from, to));
                }
            }
        }
        candidates.sort_by(|a, b| cmp_weights(&a.0, &b.0));

        let mut components = DisjointSetUnion::with_capacity(self.len());
        for (idx, _) in self.live() {
            components.add(idx);
        }
        let mut forest = Vec::new();
        for (weight, from, to) in candidates {
            if forest.len() + 1 >= self.len() {
                break;
            }
            if components.union(&from, &to) {
                if let Some(edge) = self.spanning_edge(from, to, weight) {
                    forest.push(edge);
                }
            }
        }
        forest
    }

    fn push_frontier<F>(
        &self,
        frontier: &mut BinaryHeap<(W, usize, usize), F>,
        from: usize,
        in_tree: &[bool],
    ) where
        F: Fn(&(W, usize, usize), &(W, usize, usize)) -> Ordering,
    {
        for to in self.adjacent(from, Direction::Out) {
            if !in_tree[to] {
                frontier.push((self.edge_cost(from, to), from, to));
            }
        }
    }

    fn spanning_edge(&self, from: usize, to: usize, weight: W) -> Option<SpanningEdge<V, W>> {
        Some(SpanningEdge {
            from: self.value(from)?.clone(),
            to: self.value(to)?.clone(),
            weight,
        })
    }
}
