//! Shortest paths: BFS for hop counts, Dijkstra for non-negative weights, Bellman-Ford when
//! weights may be negative.

use super::direction::Direction;
use super::{Graph, VertexMap};
use crate::heap::BinaryHeap;
use crate::weight::{Distance, Weight, cmp_weights};
use std::borrow::Borrow;
use std::collections::VecDeque;
use std::hash::Hash;

/// Arguments of [`Graph::short_path_weighted`].
#[derive(Debug)]
pub struct WeightedQuery<'a, Q: ?Sized> {
    pub from: &'a Q,
    pub to: Option<&'a Q>,
    pub negative_weights: bool,
}

impl<'a, Q: ?Sized> WeightedQuery<'a, Q> {
    pub fn new(from: &'a Q) -> Self {
        Self {
            from,
            to: None,
            negative_weights: false,
        }
    }

    pub fn to(mut self, to: &'a Q) -> Self {
        self.to = Some(to);
        self
    }

    pub fn negative_weights(mut self, enabled: bool) -> Self {
        self.negative_weights = enabled;
        self
    }
}

// `Q` is usually unsized (`str`), so these can't be derived.
impl<Q: ?Sized> Clone for WeightedQuery<'_, Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: ?Sized> Copy for WeightedQuery<'_, Q> {}

/// Result of a single-target Dijkstra run.
#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraPath<V, W> {
    /// `from ..= to`, empty when `to` is unreachable.
    pub path: Vec<V>,
    pub cost: Option<W>,
}

/// Result of Bellman-Ford for one target.
#[derive(Debug, Clone, PartialEq)]
pub struct BellmanFordPath<V, W> {
    pub distance: Distance<W>,
    /// `from ..= target` when reachable. An unreachable target reports only itself.
    pub path: Vec<V>,
    /// The parent chain of the target loops, i.e. a negative cycle sits on the path.
    pub cycle: bool,
}

/// Output of [`Graph::short_path_weighted`], one variant per query shape.
#[derive(Debug, Clone)]
pub enum WeightedPaths<V, W> {
    /// Dijkstra with a target.
    Target(DijkstraPath<V, W>),
    /// Dijkstra without a target: distance to every reachable vertex except the source.
    All(VertexMap<V, W>),
    /// Bellman-Ford with a target.
    BellmanFord(BellmanFordPath<V, W>),
    /// Bellman-Ford without a target: one entry per vertex except the source.
    BellmanFordAll(Vec<BellmanFordPath<V, W>>),
}

// `VertexMap` only compares when its keys hash, which a derive can't express.
impl<V: Eq + Hash, W: PartialEq> PartialEq for WeightedPaths<V, W> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Target(a), Self::Target(b)) => a == b,
            (Self::All(a), Self::All(b)) => a == b,
            (Self::BellmanFord(a), Self::BellmanFord(b)) => a == b,
            (Self::BellmanFordAll(a), Self::BellmanFordAll(b)) => a == b,
            _ => false,
        }
    }
}

/// Parent links of a single-source search, indexed by slot.
struct Parents(Vec<Option<usize>>);

impl Parents {
    fn new(len: usize) -> Self {
        Self(vec![None; len])
    }

    fn set(&mut self, child: usize, parent: usize) {
        self.0[child] = Some(parent);
    }

    fn count(&self) -> usize {
        self.0.iter().filter(|p| p.is_some()).count()
    }

    /// Slots from the root of the parent tree down to `target`.
    fn trail(&self, target: usize) -> Vec<usize> {
        let mut trail = vec![target];
        let mut cur = target;
        while let Some(parent) = self.0[cur] {
            trail.push(parent);
            cur = parent;
        }
        trail.reverse();
        trail
    }

    /// Like [`Parents::trail`], but gives up once the walk is longer than any acyclic chain
    /// could be. The flag reports whether it gave up.
    fn bounded_trail(&self, target: usize) -> (Vec<usize>, bool) {
        let limit = self.count() + 1;
        let mut trail = vec![target];
        let mut cur = target;
        let mut cycle = false;
        while let Some(parent) = self.0[cur] {
            if trail.len() > limit {
                cycle = true;
                break;
            }
            trail.push(parent);
            cur = parent;
        }
        trail.reverse();
        (trail, cycle)
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone,
{
    /// Fewest-hops path from `from` to `to`, both included.
    ///
    /// Empty when either endpoint is unknown or `to` can't be reached.
    pub fn short_path<Q>(&self, from: &Q, to: &Q) -> Vec<V>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some((source, target)) = self.slots_of(from, to) else {
            return Vec::new();
        };
        if source == target {
            return self.values([source]);
        }
        let mut found = false;
        let parents = self.breadth_first_parents(source, |idx| {
            found = idx == target;
            found
        });
        if !found {
            return Vec::new();
        }
        self.values(parents.trail(target))
    }

    /// Fewest-hops path to every vertex reachable from `from`, keyed by target in discovery
    /// order. `from` itself is not a key.
    pub fn short_paths<Q>(&self, from: &Q) -> VertexMap<V, Vec<V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut out = VertexMap::default();
        let Some(source) = self.slot_of(from) else {
            return out;
        };
        let mut discovered = Vec::new();
        let parents = self.breadth_first_parents(source, |idx| {
            discovered.push(idx);
            false
        });
        for idx in discovered {
            if let Some(value) = self.value(idx) {
                out.insert(value.clone(), self.values(parents.trail(idx)));
            }
        }
        out
    }

    /// BFS parent tree from `source`. `on_discover` sees every newly reached slot and may
    /// return `true` to stop the search.
    fn breadth_first_parents(
        &self,
        source: usize,
        mut on_discover: impl FnMut(usize) -> bool,
    ) -> Parents {
        let mut parents = Parents::new(self.slots.len());
        let mut marks = self.visit_marks();
        let mut queue = VecDeque::from([source]);
        marks[source] = true;
        while let Some(idx) = queue.pop_front() {
            for next in self.adjacent(idx, Direction::Out) {
                if marks[next] {
                    continue;
                }
                marks[next] = true;
                parents.set(next, idx);
                if on_discover(next) {
                    return parents;
                }
                queue.push_back(next);
            }
        }
        parents
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    /// Cost of traversing `from -> to`.
    ///
    /// Undirected edges may carry their weight on either endpoint. Edges without a weight
    /// cost [`Weight::ONE`].
    pub(in crate::graph) fn edge_cost(&self, from: usize, to: usize) -> W {
        let stored = self.entry(from).and_then(|e| e.weights.get(&to));
        let stored = match stored {
            None if !self.options.directed => self.entry(to).and_then(|e| e.weights.get(&from)),
            found => found,
        };
        stored.copied().unwrap_or(W::ONE)
    }

    /// Runs the search matching `query`:
    ///
    /// | `negative_weights` | `to`    | algorithm                    | variant          |
    /// |--------------------|---------|------------------------------|------------------|
    /// | `false`            | `Some`  | Dijkstra, stops at `to`      | `Target`         |
    /// | `false`            | `None`  | Dijkstra, full               | `All`            |
    /// | `true`             | `Some`  | Bellman-Ford                 | `BellmanFord`    |
    /// | `true`             | `None`  | Bellman-Ford                 | `BellmanFordAll` |
    ///
    /// Returns `None` only when `from` is unknown.
    pub fn short_path_weighted<Q>(
        &self,
        query: WeightedQuery<'_, Q>,
    ) -> Option<WeightedPaths<V, W>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let WeightedQuery {
            from,
            to,
            negative_weights,
        } = query;
        match (negative_weights, to) {
            (false, Some(to)) => self.dijkstra(from, to).map(WeightedPaths::Target),
            (false, None) => self.dijkstra_all(from).map(WeightedPaths::All),
            (true, Some(to)) => self.bellman_ford(from, to).map(WeightedPaths::BellmanFord),
            (true, None) => self.bellman_ford_all(from).map(WeightedPaths::BellmanFordAll),
        }
    }

    /// Cheapest path from `from` to `to`, assuming no negative weights.
    pub fn dijkstra<Q>(&self, from: &Q, to: &Q) -> Option<DijkstraPath<V, W>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let source = self.slot_of(from)?;
        let Some(target) = self.slot_of(to) else {
            return Some(DijkstraPath {
                path: Vec::new(),
                cost: None,
            });
        };
        let (dist, parents) = self.dijkstra_tree(source, Some(target));
        let Some(cost) = dist[target] else {
            return Some(DijkstraPath {
                path: Vec::new(),
                cost: None,
            });
        };
        Some(DijkstraPath {
            path: self.values(parents.trail(target)),
            cost: Some(cost),
        })
    }

    /// Cheapest distance from `from` to every reachable vertex, in insertion order.
    pub fn dijkstra_all<Q>(&self, from: &Q) -> Option<VertexMap<V, W>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let source = self.slot_of(from)?;
        let (dist, _) = self.dijkstra_tree(source, None);
        let out = self
            .live()
            .filter(|(idx, _)| *idx != source)
            .filter_map(|(idx, e)| dist[idx].map(|d| (e.value.clone(), d)))
            .collect();
        Some(out)
    }

    fn dijkstra_tree(&self, source: usize, target: Option<usize>) -> (Vec<Option<W>>, Parents) {
        let mut dist: Vec<Option<W>> = vec![None; self.slots.len()];
        let mut parents = Parents::new(self.slots.len());
        let mut settled = self.visit_marks();
        let mut heap = BinaryHeap::new(|a: &(W, usize), b: &(W, usize)| cmp_weights(&a.0, &b.0));
        let mut warned = false;

        dist[source] = Some(W::ZERO);
        heap.push((W::ZERO, source));
        while let Some((d, idx)) = heap.pop() {
            if settled[idx] {
                continue;
            }
            settled[idx] = true;
            if target == Some(idx) {
                break;
            }
            for next in self.adjacent(idx, Direction::Out) {
                if settled[next] {
                    continue;
                }
                let cost = self.edge_cost(idx, next);
                if !warned && cost < W::ZERO {
                    warned = true;
                    tracing::debug!(from = idx, to = next, "dijkstra met a negative weight");
                }
                let candidate = d + cost;
                if dist[next].is_none_or(|cur| candidate < cur) {
                    dist[next] = Some(candidate);
                    parents.set(next, idx);
                    heap.push((candidate, next));
                }
            }
        }
        (dist, parents)
    }

    /// Cheapest path from `from` to `to`; tolerates negative weights.
    pub fn bellman_ford<Q>(&self, from: &Q, to: &Q) -> Option<BellmanFordPath<V, W>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let source = self.slot_of(from)?;
        let Some(target) = self.slot_of(to) else {
            return Some(BellmanFordPath {
                distance: Distance::Unreachable,
                path: Vec::new(),
                cycle: false,
            });
        };
        let (dist, parents) = self.bellman_ford_tree(source);
        Some(self.bellman_ford_path(&dist, &parents, target))
    }

    /// Bellman-Ford result for every vertex except `from`, in insertion order.
    pub fn bellman_ford_all<Q>(&self, from: &Q) -> Option<Vec<BellmanFordPath<V, W>>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let source = self.slot_of(from)?;
        let (dist, parents) = self.bellman_ford_tree(source);
        let out = self
            .live()
            .filter(|(idx, _)| *idx != source)
            .map(|(idx, _)| self.bellman_ford_path(&dist, &parents, idx))
            .collect();
        Some(out)
    }

    fn bellman_ford_tree(&self, source: usize) -> (Vec<Option<W>>, Parents) {
        let mut dist: Vec<Option<W>> = vec![None; self.slots.len()];
        let mut parents = Parents::new(self.slots.len());
        dist[source] = Some(W::ZERO);

        for _ in 1..self.len() {
            let mut changed = false;
            for (idx, _) in self.live() {
                let Some(d) = dist[idx] else {
                    continue;
                };
                for next in self.adjacent(idx, Direction::Out) {
                    let candidate = d + self.edge_cost(idx, next);
                    if dist[next].is_none_or(|cur| candidate < cur) {
                        dist[next] = Some(candidate);
                        parents.set(next, idx);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        (dist, parents)
    }

    fn bellman_ford_path(
        &self,
        dist: &[Option<W>],
        parents: &Parents,
        target: usize,
    ) -> BellmanFordPath<V, W> {
        let Some(distance) = dist[target] else {
            return BellmanFordPath {
                distance: Distance::Unreachable,
                path: self.values([target]),
                cycle: false,
            };
        };
        let (trail, cycle) = parents.bounded_trail(target);
        if cycle {
            tracing::debug!(target, "bellman-ford path runs through a negative cycle");
        }
        BellmanFordPath {
            distance: Distance::Finite(distance),
            path: self.values(trail),
            cycle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_trail_stops_on_a_parent_loop() {
        let mut parents = Parents::new(3);
        parents.set(1, 0);
        parents.set(2, 1);
        parents.set(0, 2);

        let (trail, cycle) = parents.bounded_trail(1);
        assert!(cycle);
        assert_eq!(trail, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn bounded_trail_matches_trail_without_loops() {
        let mut parents = Parents::new(4);
        parents.set(1, 0);
        parents.set(2, 1);
        parents.set(3, 1);

        assert_eq!(parents.bounded_trail(2), (parents.trail(2), false));
        assert_eq!(parents.trail(3), vec![0, 1, 3]);
    }
}
