//! Explicit-stack depth-first driver shared by the DFS-based algorithms.
//!
//! The driver reproduces the event order of a recursive DFS (children in adjacency order,
//! `Finish` after the last child) without growing the call stack.

use super::Graph;
use super::direction::Direction;
use std::ops::ControlFlow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::graph) enum DfsEvent {
    Discover(usize),
    Finish(usize),
    /// Edge to a vertex that was already discovered.
    Revisit { from: usize, to: usize },
}

impl<V, W> Graph<V, W> {
    /// A `visited` vector sized for the arena.
    pub(in crate::graph) fn visit_marks(&self) -> Vec<bool> {
        vec![false; self.slots.len()]
    }

    /// Runs one DFS tree rooted at `start`, skipping vertices already marked in `visited`.
    pub(in crate::graph) fn depth_first<F>(
        &self,
        start: usize,
        dir: Direction,
        visited: &mut [bool],
        mut visit: F,
    ) -> ControlFlow<()>
    where
        F: FnMut(DfsEvent) -> ControlFlow<()>,
    {
        if visited.get(start).copied().unwrap_or(true) {
            return ControlFlow::Continue(());
        }
        visited[start] = true;
        visit(DfsEvent::Discover(start))?;

        let directed = self.options.directed;
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        while let Some(frame) = stack.last_mut() {
            let (idx, pos) = *frame;
            let next = self
                .entry(idx)
                .and_then(|e| dir.set(e, directed).get_index(pos))
                .copied();
            let Some(child) = next else {
                stack.pop();
                visit(DfsEvent::Finish(idx))?;
                continue;
            };
            frame.1 += 1;
            if visited[child] {
                visit(DfsEvent::Revisit {
                    from: idx,
                    to: child,
                })?;
                continue;
            }
            visited[child] = true;
            visit(DfsEvent::Discover(child))?;
            stack.push((child, 0));
        }
        ControlFlow::Continue(())
    }

    /// Post-order of a DFS over every vertex, roots taken in insertion order.
    pub(in crate::graph) fn finishing_order(&self, dir: Direction) -> Vec<usize> {
        let mut visited = self.visit_marks();
        let mut order = Vec::with_capacity(self.len());
        for (root, _) in self.live() {
            let _ = self.depth_first(root, dir, &mut visited, |event| {
                if let DfsEvent::Finish(idx) = event {
                    order.push(idx);
                }
                ControlFlow::Continue(())
            });
        }
        order
    }
}
