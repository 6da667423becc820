//! Traversals, connected components, cycle detection and topological order.

use super::direction::Direction;
use super::walk::DfsEvent;
use super::{Graph, VertexSet};
use std::borrow::Borrow;
use std::collections::VecDeque;
use std::hash::Hash;
use std::ops::ControlFlow;

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone,
{
    /// Depth-first preorder over outgoing edges.
    ///
    /// `start` defaults to the first vertex. An unknown start yields an empty set.
    pub fn dfs<Q>(&self, start: Option<&Q>) -> VertexSet<V>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut visited = VertexSet::default();
        self.dfs_into(start, &mut visited);
        visited
    }

    /// [`Graph::dfs`] from the first vertex.
    pub fn dfs_from_first(&self) -> VertexSet<V> {
        let mut visited = VertexSet::default();
        if let Some(root) = self.first_slot() {
            self.preorder_into(root, &mut visited);
        }
        visited
    }

    /// Like [`Graph::dfs`], but continues an earlier walk: vertices already in `visited` are
    /// not entered again, and newly reached ones are appended.
    pub fn dfs_into<Q>(&self, start: Option<&Q>, visited: &mut VertexSet<V>)
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let root = match start {
            Some(value) => self.slot_of(value),
            None => self.first_slot(),
        };
        if let Some(root) = root {
            self.preorder_into(root, visited);
        }
    }

    fn preorder_into(&self, root: usize, visited: &mut VertexSet<V>) {
        let mut marks = self.visit_marks();
        for value in visited.iter() {
            if let Some(&idx) = self.index.get(value) {
                marks[idx] = true;
            }
        }
        let _ = self.depth_first(root, Direction::Out, &mut marks, |event| {
            if let DfsEvent::Discover(idx) = event {
                if let Some(value) = self.value(idx) {
                    visited.insert(value.clone());
                }
            }
            ControlFlow::Continue(())
        });
    }

    /// Breadth-first order from the first vertex.
    pub fn bfs(&self) -> VertexSet<V> {
        let mut order = VertexSet::default();
        let Some(root) = self.first_slot() else {
            return order;
        };
        let mut marks = self.visit_marks();
        let mut queue = VecDeque::from([root]);
        marks[root] = true;
        while let Some(idx) = queue.pop_front() {
            if let Some(value) = self.value(idx) {
                order.insert(value.clone());
            }
            for next in self.adjacent(idx, Direction::Out) {
                if !marks[next] {
                    marks[next] = true;
                    queue.push_back(next);
                }
            }
        }
        order
    }

    /// Groups vertices by reachability over outgoing edges.
    ///
    /// Every not-yet-visited vertex, in insertion order, starts a new component holding the
    /// preorder of the vertices it reaches.
    pub fn wcc(&self) -> Vec<Vec<V>> {
        let mut marks = self.visit_marks();
        let mut components = Vec::new();
        for (root, _) in self.live() {
            if marks[root] {
                continue;
            }
            let mut component = Vec::new();
            let _ = self.depth_first(root, Direction::Out, &mut marks, |event| {
                if let DfsEvent::Discover(idx) = event {
                    component.push(idx);
                }
                ControlFlow::Continue(())
            });
            components.push(self.values(component));
        }
        components
    }

    /// Strongly connected components (Kosaraju).
    ///
    /// Undirected graphs defer to [`Graph::wcc`]. Each component lists its vertices in the
    /// post-order of the reverse-edge pass.
    pub fn scc(&self) -> Vec<Vec<V>> {
        if !self.options.directed {
            return self.wcc();
        }

        let mut stack = self.finishing_order(Direction::Out);
        let mut marks = self.visit_marks();
        let mut components = Vec::new();
        while let Some(root) = stack.pop() {
            if marks[root] {
                continue;
            }
            let mut component = Vec::new();
            let _ = self.depth_first(root, Direction::Out.reverse(), &mut marks, |event| {
                if let DfsEvent::Finish(idx) = event {
                    component.push(idx);
                }
                ControlFlow::Continue(())
            });
            components.push(self.values(component));
        }
        components
    }

    /// Whether the graph contains a cycle.
    ///
    /// Every undirected edge is stored in both directions, so any edge at all counts as one.
    /// Directed graphs use three-colour DFS: reaching a vertex that is still on the active path
    /// closes a cycle.
    pub fn has_cycles(&self) -> bool {
        if !self.options.directed {
            return self.live().any(|(_, e)| !e.out.is_empty());
        }

        let mut marks = self.visit_marks();
        let mut on_path = self.visit_marks();
        for (root, _) in self.live() {
            let flow = self.depth_first(root, Direction::Out, &mut marks, |event| match event {
                DfsEvent::Discover(idx) => {
                    on_path[idx] = true;
                    ControlFlow::Continue(())
                }
                DfsEvent::Finish(idx) => {
                    on_path[idx] = false;
                    ControlFlow::Continue(())
                }
                DfsEvent::Revisit { to, .. } if on_path[to] => ControlFlow::Break(()),
                DfsEvent::Revisit { .. } => ControlFlow::Continue(()),
            });
            if flow.is_break() {
                return true;
            }
        }
        false
    }

    /// Vertices ordered so that every edge points forward. Empty when the graph has a cycle.
    pub fn topological_sort(&self) -> Vec<V> {
        if self.has_cycles() {
            tracing::debug!("topological sort requested on a cyclic graph");
            return Vec::new();
        }
        let mut order = self.finishing_order(Direction::Out);
        order.reverse();
        self.values(order)
    }
}
