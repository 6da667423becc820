//! The mutable vertex/edge store.
//!
//! Vertices live in an arena of slots. A slot index is the vertex's internal identity: it
//! never changes while the vertex is alive, it is never handed out to another vertex, and it
//! is what every adjacency set and weight map refers to. The caller-visible value is only a
//! key into the arena, which makes [`Graph::update`] a pure re-key.
//!
//! Algorithms live in sibling modules (`traversal`, `paths`, `spanning`) and only ever read
//! the arena through the helpers defined here.

use rustc_hash::FxBuildHasher;
use std::borrow::Borrow;
use std::hash::Hash;

use crate::error::{Error, Result};

mod direction;
mod entries;
mod iter;
mod options;
mod paths;
mod spanning;
mod traversal;
mod walk;

use direction::Direction;
use entries::VertexEntry;

pub use iter::{Edges, Vertices};
pub use options::GraphOptions;
pub use paths::{BellmanFordPath, DijkstraPath, WeightedPaths, WeightedQuery};
pub use spanning::SpanningEdge;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type IndexSet<T> = indexmap::IndexSet<T, FxBuildHasher>;

/// Insertion-ordered set of vertex values returned by traversals.
pub type VertexSet<V> = indexmap::IndexSet<V, FxBuildHasher>;
/// Insertion-ordered map keyed by vertex value.
pub type VertexMap<V, T> = indexmap::IndexMap<V, T, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct Graph<V, W = f64> {
    options: GraphOptions,
    slots: Vec<Option<VertexEntry<V, W>>>,
    index: HashMap<V, usize>,
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<V, W> Graph<V, W> {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            slots: Vec::new(),
            index: HashMap::default(),
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.options.weighted
    }

    pub fn is_self_cycling(&self) -> bool {
        self.options.self_cycling
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn vertices(&self) -> Vertices<'_, V, W> {
        Vertices::new(&self.slots)
    }

    /// Every edge as a `(from, to)` pair. Undirected edges are reported once.
    pub fn edges(&self) -> Edges<'_, V, W> {
        Edges::new(&self.slots, self.options.directed)
    }

    fn entry(&self, idx: usize) -> Option<&VertexEntry<V, W>> {
        self.slots.get(idx)?.as_ref()
    }

    fn entry_mut(&mut self, idx: usize) -> Option<&mut VertexEntry<V, W>> {
        self.slots.get_mut(idx)?.as_mut()
    }

    fn value(&self, idx: usize) -> Option<&V> {
        self.entry(idx).map(|e| &e.value)
    }

    fn live(&self) -> impl Iterator<Item = (usize, &VertexEntry<V, W>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|e| (idx, e)))
    }

    fn first_slot(&self) -> Option<usize> {
        self.live().next().map(|(idx, _)| idx)
    }

    fn adjacent(&self, idx: usize, dir: Direction) -> impl Iterator<Item = usize> + '_ {
        let directed = self.options.directed;
        self.entry(idx)
            .into_iter()
            .flat_map(move |e| dir.set(e, directed).iter().copied())
    }

    fn adjacent_count(&self, idx: usize, dir: Direction) -> usize {
        self.entry(idx)
            .map(|e| dir.set(e, self.options.directed).len())
            .unwrap_or(0)
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone,
{
    fn slot_of<Q>(&self, value: &Q) -> Option<usize>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(value).copied()
    }

    fn slots_of<Q>(&self, from: &Q, to: &Q) -> Option<(usize, usize)>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Some((self.slot_of(from)?, self.slot_of(to)?))
    }

    fn values(&self, idxs: impl IntoIterator<Item = usize>) -> Vec<V> {
        idxs.into_iter()
            .filter_map(|idx| self.value(idx).cloned())
            .collect()
    }

    fn allows_loop(&self, from: usize, to: usize) -> bool {
        from != to || self.options.self_cycling
    }

    /// Inserts `value`. Existing values are left untouched.
    pub fn add(&mut self, value: V) -> &mut Self {
        if self.index.contains_key(&value) {
            return self;
        }
        let idx = self.slots.len();
        self.slots.push(Some(VertexEntry::new(value.clone())));
        self.index.insert(value, idx);
        self
    }

    pub fn has<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(value)
    }

    /// Renames `prev` to `value`, keeping every edge and weight attached to the vertex.
    ///
    /// Returns `false` when `prev` is unknown or `value` already names another vertex.
    pub fn update<Q>(&mut self, prev: &Q, value: V) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.try_update(prev, value).is_ok()
    }

    pub fn try_update<Q>(&mut self, prev: &Q, value: V) -> Result<()>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(idx) = self.slot_of(prev) else {
            return Err(Error::UnknownVertex);
        };
        if let Some(&other) = self.index.get(&value) {
            if other == idx {
                return Ok(());
            }
            tracing::debug!(slot = idx, other, "rename rejected: value already in use");
            return Err(Error::VertexExists);
        }
        let Some(entry) = self.entry_mut(idx) else {
            return Err(Error::UnknownVertex);
        };
        entry.value = value.clone();
        self.index.remove(prev);
        self.index.insert(value, idx);
        Ok(())
    }

    /// Removes `value` together with every edge and weight that references it.
    pub fn delete<Q>(&mut self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(idx) = self.index.remove(value) else {
            return false;
        };
        let Some(entry) = self.slots.get_mut(idx).and_then(Option::take) else {
            return false;
        };
        let directed = self.options.directed;
        for &n in &entry.out {
            if let Some(other) = self.entry_mut(n) {
                Direction::In.set_mut(other, directed).shift_remove(&idx);
                other.weights.remove(&idx);
            }
        }
        for &n in &entry.in_ {
            if let Some(other) = self.entry_mut(n) {
                other.out.shift_remove(&idx);
                other.weights.remove(&idx);
            }
        }
        true
    }

    /// Adds the edge `from -> to` (mirrored for undirected graphs).
    ///
    /// Missing endpoints and forbidden self-loops make this a no-op. `weight` is recorded
    /// under `from` on weighted graphs and ignored otherwise.
    pub fn connect<Q>(&mut self, from: &Q, to: &Q, weight: Option<W>) -> &mut Self
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some((f, t)) = self.slots_of(from, to) else {
            tracing::trace!("connect ignored: unknown endpoint");
            return self;
        };
        if !self.allows_loop(f, t) {
            tracing::trace!(slot = f, "connect ignored: self-loops are disabled");
            return self;
        }
        let GraphOptions {
            weighted, directed, ..
        } = self.options;
        let weight = weight.filter(|_| weighted);
        if let Some(entry) = self.entry_mut(f) {
            entry.out.insert(t);
        }
        if let Some(entry) = self.entry_mut(t) {
            Direction::In.set_mut(entry, directed).insert(f);
        }
        if let Some(weight) = weight {
            self.store_weight(f, t, weight);
        }
        self
    }

    /// Records the weight of `f -> t` under `f`. An undirected edge keeps a single weight, so
    /// any copy stored under `t` is dropped.
    fn store_weight(&mut self, f: usize, t: usize, weight: W) {
        if let Some(entry) = self.entry_mut(f) {
            entry.weights.insert(t, weight);
        }
        if !self.options.directed && f != t {
            if let Some(entry) = self.entry_mut(t) {
                entry.weights.remove(&f);
            }
        }
    }

    /// Removes the edge `from -> to` and any weight recorded on it.
    ///
    /// Returns `false` only when an endpoint is unknown.
    pub fn disconnect<Q>(&mut self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some((f, t)) = self.slots_of(from, to) else {
            return false;
        };
        let directed = self.options.directed;
        if let Some(entry) = self.entry_mut(f) {
            entry.out.shift_remove(&t);
            entry.weights.remove(&t);
        }
        if let Some(entry) = self.entry_mut(t) {
            Direction::In.set_mut(entry, directed).shift_remove(&f);
            if !directed {
                entry.weights.remove(&f);
            }
        }
        true
    }

    /// Number of outgoing edges. 0 for unknown vertices.
    pub fn degree<Q>(&self, value: &Q) -> usize
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slot_of(value)
            .map(|idx| self.adjacent_count(idx, Direction::Out))
            .unwrap_or(0)
    }

    /// Number of incoming edges; equal to [`Graph::degree`] on undirected graphs.
    pub fn connectivity<Q>(&self, value: &Q) -> usize
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slot_of(value)
            .map(|idx| self.adjacent_count(idx, Direction::In))
            .unwrap_or(0)
    }

    pub fn out_edges<Q>(&self, from: &Q) -> Vec<V>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edges_in_direction(from, Direction::Out)
    }

    pub fn in_edges<Q>(&self, from: &Q) -> Vec<V>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edges_in_direction(from, Direction::In)
    }

    fn edges_in_direction<Q>(&self, from: &Q, dir: Direction) -> Vec<V>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.slot_of(from) {
            Some(idx) => self.values(self.adjacent(idx, dir)),
            None => Vec::new(),
        }
    }

    pub fn has_out_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.has_edge_in_direction(from, to, Direction::Out)
    }

    /// Whether `to -> from` exists.
    pub fn has_in_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.has_edge_in_direction(from, to, Direction::In)
    }

    fn has_edge_in_direction<Q>(&self, from: &Q, to: &Q, dir: Direction) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some((f, t)) = self.slots_of(from, to) else {
            return false;
        };
        self.entry(f)
            .is_some_and(|e| dir.set(e, self.options.directed).contains(&t))
    }

    /// Stores `weight` on the existing edge `from -> to`.
    ///
    /// Returns `false` (and stores nothing) on unweighted graphs, for unknown endpoints,
    /// for forbidden self-loops and when the edge does not exist.
    pub fn set_weight<Q>(&mut self, from: &Q, to: &Q, weight: W) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.options.weighted {
            return false;
        }
        let Some((f, t)) = self.slots_of(from, to) else {
            return false;
        };
        if !self.allows_loop(f, t) {
            return false;
        }
        if !self.entry(f).is_some_and(|e| e.out.contains(&t)) {
            tracing::trace!(from = f, to = t, "set_weight ignored: no such edge");
            return false;
        }
        self.store_weight(f, t, weight);
        true
    }

    pub fn get_weight<Q>(&self, from: &Q, to: &Q) -> Option<&W>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.options.weighted {
            return None;
        }
        let (f, t) = self.slots_of(from, to)?;
        self.entry(f)?.weights.get(&t)
    }

    pub fn has_weight<Q>(&self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_weight(from, to).is_some()
    }

    /// Clears the weight of `from -> to`, keeping the edge.
    pub fn delete_weight<Q>(&mut self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.options.weighted {
            return false;
        }
        let Some((f, t)) = self.slots_of(from, to) else {
            return false;
        };
        self.entry_mut(f)
            .is_some_and(|e| e.weights.remove(&t).is_some())
    }
}
