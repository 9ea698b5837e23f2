//! Min-priority container for best-first searches.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

struct Entry<T> {
    score: OrderedFloat<f32>,
    seq: u64,
    item: T,
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest score first,
        // and among equal scores the earliest insertion.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

/// A min-priority queue keyed by an `f32` score.
///
/// Items are never deduplicated: pushing an item again with a new score adds
/// a second entry, and the lowest one comes out first. Searches skip the
/// stale entries of cells they have already resolved.
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Create an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            seq: 0,
        }
    }

    /// Insert `item` with `score`.
    pub fn push(&mut self, item: T, score: f32) {
        self.heap.push(Entry {
            score: OrderedFloat(score),
            seq: self.seq,
            item,
        });
        self.seq += 1;
    }

    /// Remove and return the entry with the smallest score. Ties go to the
    /// entry pushed first.
    pub fn pop_min(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    /// Whether no entries are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale duplicates included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_score() {
        let mut q = PriorityQueue::new();
        q.push('c', 3.0);
        q.push('a', 1.0);
        q.push('d', 4.5);
        q.push('b', 2.0);
        assert_eq!(q.len(), 4);
        let order: Vec<char> = std::iter::from_fn(|| q.pop_min()).collect();
        assert_eq!(order, vec!['a', 'b', 'c', 'd']);
        assert!(q.is_empty());
        assert_eq!(q.pop_min(), None);
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut q = PriorityQueue::new();
        for i in 0..10 {
            q.push(i, 7.0);
        }
        let order: Vec<i32> = std::iter::from_fn(|| q.pop_min()).collect();
        assert_eq!(order, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn duplicates_coexist() {
        let mut q = PriorityQueue::with_capacity(4);
        q.push("x", 5.0);
        q.push("y", 4.0);
        q.push("x", 2.0);
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop_min(), Some("x"));
        assert_eq!(q.pop_min(), Some("y"));
        assert_eq!(q.pop_min(), Some("x"));
    }

    #[test]
    fn interleaved_push_pop() {
        let mut q = PriorityQueue::default();
        q.push(1, 1.0);
        q.push(2, 0.5);
        assert_eq!(q.pop_min(), Some(2));
        q.push(3, 0.75);
        q.push(4, 1.0);
        assert_eq!(q.pop_min(), Some(3));
        assert_eq!(q.pop_min(), Some(1));
        assert_eq!(q.pop_min(), Some(4));
    }
}
