//! Comparator-driven binary heap.
//!
//! Priority is decided by a caller-supplied three-way comparator: when
//! `cmp(a, b)` returns [`Ordering::Less`], `a` is served before `b`. A min-heap and a max-heap
//! are therefore the same structure with opposite comparators.
//!
//! Used by [`Graph::dijkstra`](crate::Graph::dijkstra) and
//! [`Graph::mst_prim`](crate::Graph::mst_prim).

use std::cmp::Ordering;
use std::fmt;

pub struct BinaryHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    tree: Vec<T>,
    cmp: F,
}

impl<T: Ord> BinaryHeap<T, fn(&T, &T) -> Ordering> {
    /// Smallest item first.
    pub fn min_heap() -> Self {
        Self::new(T::cmp)
    }

    /// Largest item first.
    pub fn max_heap() -> Self {
        Self::new(|a: &T, b: &T| b.cmp(a))
    }
}

impl<T, F> BinaryHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(cmp: F) -> Self {
        Self {
            tree: Vec::new(),
            cmp,
        }
    }

    pub fn with_capacity(capacity: usize, cmp: F) -> Self {
        Self {
            tree: Vec::with_capacity(capacity),
            cmp,
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.tree.first()
    }

    pub fn push(&mut self, item: T) {
        self.tree.push(item);
        self.sift_up(self.tree.len() - 1);
    }

    pub fn pop(&mut self) -> Option<T> {
        match self.tree.len() {
            0 => None,
            1 => self.tree.pop(),
            len => {
                self.tree.swap(0, len - 1);
                let top = self.tree.pop();
                self.sift_down(0);
                top
            }
        }
    }

    /// Appends `items` to the current contents and restores heap order bottom-up in O(n).
    pub fn heapify<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.tree.extend(items);
        let len = self.tree.len();
        if len < 2 {
            return;
        }
        for idx in (0..=(len - 2) / 2).rev() {
            self.sift_down(idx);
        }
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// The backing array in heap order. Only the root position is meaningful to callers.
    pub fn as_slice(&self) -> &[T] {
        &self.tree
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.tree.clone()
    }

    /// Drains the heap in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.tree.len());
        while let Some(item) = self.pop() {
            out.push(item);
        }
        out
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if (self.cmp)(&self.tree[idx], &self.tree[parent]) != Ordering::Less {
                break;
            }
            self.tree.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.tree.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                return;
            }
            let right = left + 1;
            // A missing right child compares equal to the left one, so the left one wins.
            let child = if right < len
                && (self.cmp)(&self.tree[left], &self.tree[right]) != Ordering::Less
            {
                right
            } else {
                left
            };
            if (self.cmp)(&self.tree[idx], &self.tree[child]) != Ordering::Greater {
                return;
            }
            self.tree.swap(idx, child);
            idx = child;
        }
    }
}

impl<T, F> Extend<T> for BinaryHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for BinaryHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_heap_order<T, F: Fn(&T, &T) -> Ordering>(heap: &BinaryHeap<T, F>) {
        let tree = heap.as_slice();
        for idx in 1..tree.len() {
            let parent = (idx - 1) / 2;
            assert_ne!((heap.cmp)(&tree[idx], &tree[parent]), Ordering::Less);
        }
    }

    #[test]
    fn heapify_keeps_heap_order_for_every_prefix() {
        for len in 0..12 {
            let mut heap = BinaryHeap::min_heap();
            heap.heapify((0..len).rev());
            assert_heap_order(&heap);
            assert_eq!(heap.len(), len);
        }
    }

    #[test]
    fn heapify_appends_to_existing_contents() {
        let mut heap = BinaryHeap::min_heap();
        heap.push(4);
        heap.push(9);
        heap.heapify([7, 1, 3]);
        assert_heap_order(&heap);
        assert_eq!(heap.into_sorted_vec(), vec![1, 3, 4, 7, 9]);
    }
}
