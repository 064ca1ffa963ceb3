use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over `(priority, key)` pairs backed by `BinaryHeap`.
///
/// There is no decrease-key: callers push a new entry whenever a better
/// priority is found and discard stale entries on pop. Entries with equal
/// priority come out in ascending key order, so the pop sequence is fully
/// determined by the pushes.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<K, P>
where
    K: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, K)>>,

    /// Largest number of entries held at once
    high_water: usize,
}

impl<K, P> MinPriorityQueue<K, P>
where
    K: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
            high_water: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
            high_water: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the largest length the queue has reached
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Pushes a key with the given priority. Duplicate keys are allowed.
    pub fn push(&mut self, key: K, priority: P) {
        self.heap.push(Reverse((priority, key)));
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(K, P)> {
        self.heap.pop().map(|Reverse((priority, key))| (key, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(K, P)> {
        self.heap.peek().map(|Reverse((priority, key))| (*key, *priority))
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<K, P> Default for MinPriorityQueue<K, P>
where
    K: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
