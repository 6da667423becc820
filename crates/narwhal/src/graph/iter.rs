//! Borrowing iterators over the vertex arena.

use super::entries::VertexEntry;
use std::iter::FusedIterator;

/// Vertex values in insertion order. Created by [`Graph::vertices`](super::Graph::vertices).
pub struct Vertices<'a, V, W> {
    slots: std::slice::Iter<'a, Option<VertexEntry<V, W>>>,
}

impl<'a, V, W> Vertices<'a, V, W> {
    pub(in crate::graph) fn new(slots: &'a [Option<VertexEntry<V, W>>]) -> Self {
        Self {
            slots: slots.iter(),
        }
    }
}

impl<'a, V, W> Iterator for Vertices<'a, V, W> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().flatten().next().map(|e| &e.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.slots.size_hint().1)
    }
}

impl<V, W> FusedIterator for Vertices<'_, V, W> {}

/// `(from, to)` pairs. Created by [`Graph::edges`](super::Graph::edges).
///
/// Sources are visited in insertion order. On undirected graphs a pair is skipped when `to`
/// was already visited as a source, so every edge shows up exactly once.
pub struct Edges<'a, V, W> {
    slots: &'a [Option<VertexEntry<V, W>>],
    directed: bool,
    source: usize,
    pos: usize,
}

impl<'a, V, W> Edges<'a, V, W> {
    pub(in crate::graph) fn new(slots: &'a [Option<VertexEntry<V, W>>], directed: bool) -> Self {
        Self {
            slots,
            directed,
            source: 0,
            pos: 0,
        }
    }

    fn advance_source(&mut self) {
        self.source += 1;
        self.pos = 0;
    }
}

impl<'a, V, W> Iterator for Edges<'a, V, W> {
    type Item = (&'a V, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let slots = self.slots;
        loop {
            let Some(entry) = slots.get(self.source)?.as_ref() else {
                self.advance_source();
                continue;
            };
            let Some(&to) = entry.out.get_index(self.pos) else {
                self.advance_source();
                continue;
            };
            self.pos += 1;
            if !self.directed && to < self.source {
                continue;
            }
            if let Some(target) = slots.get(to).and_then(Option::as_ref) {
                return Some((&entry.value, &target.value));
            }
        }
    }
}

impl<V, W> FusedIterator for Edges<'_, V, W> {}
