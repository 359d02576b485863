use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// Where a vertex currently lives in the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Index of the vertex in the heap array
    Queued(usize),
    /// Already returned by `extract_min`; cannot come back
    Extracted,
}

/// A binary min-heap over vertices with a position index for O(log n) decrease-key
///
/// Every vertex may be inserted once per queue. The index maps each queued vertex to
/// its exact heap slot and is updated on every swap, so `decrease_key` never scans.
#[derive(Debug)]
pub struct IndexedPriorityQueue<V, P>
where
    V: Clone + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    /// Heap array of (vertex, priority)
    heap: Vec<(V, P)>,

    /// Vertex -> slot
    positions: HashMap<V, Slot>,
}

impl<V, P> IndexedPriorityQueue<V, P>
where
    V: Clone + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued vertices
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the vertex is currently queued
    pub fn contains(&self, vertex: &V) -> bool {
        matches!(self.positions.get(vertex), Some(Slot::Queued(_)))
    }

    /// Returns the current priority of a queued vertex
    pub fn priority(&self, vertex: &V) -> Option<P> {
        match self.positions.get(vertex) {
            Some(Slot::Queued(index)) => Some(self.heap[*index].1),
            _ => None,
        }
    }

    /// Inserts a vertex with the given priority.
    ///
    /// Fails if the vertex was already inserted into this queue, even if it has
    /// since been extracted.
    pub fn insert(&mut self, vertex: V, priority: P) -> Result<()> {
        if let Some(slot) = self.positions.get(&vertex) {
            return Err(Error::QueueInvariantViolation(format!(
                "vertex {:?} inserted twice (currently {:?})",
                vertex, slot
            )));
        }

        let index = self.heap.len();
        self.positions.insert(vertex.clone(), Slot::Queued(index));
        self.heap.push((vertex, priority));
        self.sift_up(index);
        Ok(())
    }

    /// Lowers the priority of a queued vertex and restores heap order.
    ///
    /// A larger priority is tolerated: the entry is moved down instead, so the heap
    /// stays ordered either way.
    pub fn decrease_key(&mut self, vertex: &V, priority: P) -> Result<()> {
        let index = match self.positions.get(vertex) {
            Some(Slot::Queued(index)) => *index,
            other => {
                return Err(Error::QueueInvariantViolation(format!(
                    "decrease_key on vertex {:?} which is not queued ({:?})",
                    vertex, other
                )));
            }
        };

        let previous = self.heap[index].1;
        self.heap[index].1 = priority;
        if priority < previous {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        Ok(())
    }

    /// Removes and returns the vertex with the smallest priority.
    ///
    /// Ties are broken arbitrarily.
    pub fn extract_min(&mut self) -> Option<(V, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap_entries(0, last);
        let (vertex, priority) = self.heap.pop()?;
        self.positions.insert(vertex.clone(), Slot::Extracted);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((vertex, priority))
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap.first().map(|(vertex, priority)| (vertex, *priority))
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].1 >= self.heap[parent].1 {
                break;
            }
            self.swap_entries(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < len && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.swap_entries(index, smallest);
            index = smallest;
        }
    }

    fn swap_entries(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        if let Some(slot) = self.positions.get_mut(&self.heap[i].0) {
            *slot = Slot::Queued(i);
        }
        if let Some(slot) = self.positions.get_mut(&self.heap[j].0) {
            *slot = Slot::Queued(j);
        }
    }
}

impl<V, P> Default for IndexedPriorityQueue<V, P>
where
    V: Clone + Eq + Hash + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    impl<V, P> IndexedPriorityQueue<V, P>
    where
        V: Clone + Eq + Hash + Debug,
        P: Ord + Copy + Debug,
    {
        fn assert_invariants(&self) {
            for i in 1..self.heap.len() {
                let parent = (i - 1) / 2;
                assert!(
                    self.heap[parent].1 <= self.heap[i].1,
                    "heap order broken between slots {} and {}",
                    parent,
                    i
                );
            }
            for (i, (vertex, _)) in self.heap.iter().enumerate() {
                assert_eq!(self.positions.get(vertex), Some(&Slot::Queued(i)));
            }
            let queued = self
                .positions
                .values()
                .filter(|slot| matches!(slot, Slot::Queued(_)))
                .count();
            assert_eq!(queued, self.heap.len());
        }
    }

    #[test]
    fn test_extract_in_priority_order() {
        let mut queue = IndexedPriorityQueue::new();
        for (vertex, priority) in [("a", 5), ("b", 1), ("c", 3), ("d", 4)] {
            queue.insert(vertex, priority).unwrap();
        }

        let order: Vec<_> = std::iter::from_fn(|| queue.extract_min()).collect();
        assert_eq!(order, vec![("b", 1), ("c", 3), ("d", 4), ("a", 5)]);
        assert!(queue.is_empty());
        assert_eq!(queue.extract_min(), None);
    }

    #[test]
    fn test_decrease_key_moves_vertex_to_front() {
        let mut queue = IndexedPriorityQueue::new();
        queue.insert("a", u64::MAX).unwrap();
        queue.insert("b", 0).unwrap();
        queue.insert("c", u64::MAX).unwrap();

        assert_eq!(queue.extract_min(), Some(("b", 0)));
        queue.decrease_key(&"c", 7).unwrap();
        assert_eq!(queue.priority(&"c"), Some(7));
        assert_eq!(queue.peek(), Some((&"c", 7)));
        queue.assert_invariants();
    }

    #[test]
    fn test_increase_is_tolerated() {
        let mut queue = IndexedPriorityQueue::new();
        for (vertex, priority) in [(1, 1), (2, 2), (3, 3)] {
            queue.insert(vertex, priority).unwrap();
        }
        queue.decrease_key(&1, 10).unwrap();
        queue.assert_invariants();
        assert_eq!(queue.extract_min(), Some((2, 2)));
    }

    #[test]
    fn test_misuse_is_rejected() {
        let mut queue = IndexedPriorityQueue::new();
        queue.insert("a", 1).unwrap();

        assert!(matches!(
            queue.insert("a", 2),
            Err(Error::QueueInvariantViolation(_))
        ));
        assert!(matches!(
            queue.decrease_key(&"missing", 0),
            Err(Error::QueueInvariantViolation(_))
        ));

        queue.extract_min();
        assert!(!queue.contains(&"a"));
        assert!(matches!(
            queue.decrease_key(&"a", 0),
            Err(Error::QueueInvariantViolation(_))
        ));
        assert!(matches!(
            queue.insert("a", 0),
            Err(Error::QueueInvariantViolation(_))
        ));
    }

    #[test]
    fn test_randomized_operations_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..20 {
            let n = rng.gen_range(1..200);
            let mut queue = IndexedPriorityQueue::with_capacity(n);
            let mut next_vertex = 0usize;
            let mut last_extracted = 0u32;

            while next_vertex < n || !queue.is_empty() {
                match rng.gen_range(0..3) {
                    0 if next_vertex < n => {
                        // Never insert below what was already extracted, as in Dijkstra
                        let priority = last_extracted + rng.gen_range(0..1000);
                        queue.insert(next_vertex, priority).unwrap();
                        next_vertex += 1;
                    }
                    1 if !queue.is_empty() => {
                        let queued: Vec<usize> = queue.heap.iter().map(|(v, _)| *v).collect();
                        let vertex = queued[rng.gen_range(0..queued.len())];
                        let current = queue.priority(&vertex).unwrap();
                        let lowered = rng.gen_range(last_extracted..=current);
                        queue.decrease_key(&vertex, lowered).unwrap();
                    }
                    _ => {
                        if let Some((_, priority)) = queue.extract_min() {
                            assert!(priority >= last_extracted);
                            last_extracted = priority;
                        }
                    }
                }
                queue.assert_invariants();
            }
        }
    }
}
