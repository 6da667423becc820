//! Disjoint-set union over arbitrary hashable keys.
//!
//! Keys are interned into dense indices on [`DisjointSetUnion::add`]; the forest itself is two
//! parallel vectors (parent links and set sizes). Unions are by size, lookups compress the
//! traversed path.
//!
//! Used by [`Graph::mst_kruskal`](crate::Graph::mst_kruskal).

use rustc_hash::FxBuildHasher;
use std::borrow::Borrow;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct DisjointSetUnion<K> {
    index: HashMap<K, usize>,
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl<K> Default for DisjointSetUnion<K> {
    fn default() -> Self {
        Self {
            index: HashMap::default(),
            parent: Vec::new(),
            size: Vec::new(),
            sets: 0,
        }
    }
}

impl<K> DisjointSetUnion<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            parent: Vec::with_capacity(capacity),
            size: Vec::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Registers `key` as a singleton set. Known keys are left alone.
    pub fn add(&mut self, key: K) -> &mut Self {
        if self.index.contains_key(&key) {
            return self;
        }
        let idx = self.parent.len();
        self.index.insert(key, idx);
        self.parent.push(idx);
        self.size.push(1);
        self.sets += 1;
        self
    }

    /// Representative index of the set containing `key`.
    ///
    /// Every link on the traversed path is rewritten to point at the root, so later lookups
    /// for the same keys are O(1).
    pub fn root<Q>(&mut self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.index.get(key)?;
        Some(self.find(idx))
    }

    pub fn connected<Q>(&mut self, a: &Q, b: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.root(a), self.root(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// Size of the set containing `key`.
    pub fn size<Q>(&mut self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let root = self.root(key)?;
        Some(self.size[root])
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// The root of the smaller set is attached under the root of the larger one. When both
    /// sets have the same size the root of `b` goes under the root of `a`.
    ///
    /// Returns `false` when either key is unknown or both already share a set.
    pub fn union<Q>(&mut self, a: &Q, b: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (Some(ra), Some(rb)) = (self.root(a), self.root(b)) else {
            return false;
        };
        self.union_roots(ra, rb)
    }

    pub(crate) fn find(&mut self, idx: usize) -> usize {
        let mut root = idx;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = idx;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    fn union_roots(&mut self, ra: usize, rb: usize) -> bool {
        if ra == rb {
            return false;
        }
        let (big, small) = if self.size[ra] < self.size[rb] {
            (rb, ra)
        } else {
            (ra, rb)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.sets -= 1;
        true
    }
}
