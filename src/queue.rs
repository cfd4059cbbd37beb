//! The updatable priority queue: a min-heap cross-indexed by an AVL tree
//!
//! [`PriorityQueue`] owns one [`AvlIndex`] (task id -> heap slot) and one
//! [`IndexedHeap`] (priority-ordered storage) and is the only layer that
//! keeps them synchronized: after every heap mutation it writes the heap's
//! relocation report back into the index, so the recorded slot of every
//! live task always equals its true position in the heap array.
//!
//! That cross-reference is what makes the priority of an arbitrary task
//! updatable in O(log n): the index turns an id into a slot, the heap
//! repairs itself locally from that slot, and only the entries the repair
//! actually displaced are written back.
//!
//! # Example
//!
//! ```rust
//! use indexed_pq::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.insert("compile", 3)?;
//! queue.insert("link", 5)?;
//! queue.insert("fetch", 1)?;
//!
//! assert_eq!(queue.find_min()?, &"fetch");
//!
//! // demote fetch, promote link
//! queue.update_priority("fetch", 9)?;
//! queue.update_priority("link", 0)?;
//! assert_eq!(queue.delete_min()?, "link");
//! assert_eq!(queue.delete_min()?, "compile");
//! # Ok::<(), indexed_pq::QueueError>(())
//! ```

use std::fmt;

use crate::avl::AvlIndex;
use crate::error::QueueError;
use crate::heap::{IndexedHeap, Relocations};

/// An updatable priority queue of unique task ids with integer priorities.
///
/// Smaller priority means more urgent. Task ids must be unique; inserting a
/// live id again is refused with [`QueueError::DuplicateTask`] and leaves
/// the queue untouched.
///
/// All operations are O(log n) except construction from parallel sequences,
/// which heapifies in O(n) and builds the index in O(n log n).
#[derive(Debug, Clone)]
pub struct PriorityQueue<I: Ord + Clone> {
    index: AvlIndex<I>,
    heap: IndexedHeap<I>,
}

impl<I: Ord + Clone> Default for PriorityQueue<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Ord + Clone> PriorityQueue<I> {
    /// Creates an empty queue with the default capacity.
    pub fn new() -> Self {
        Self {
            index: AvlIndex::new(),
            heap: IndexedHeap::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` tasks.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: AvlIndex::new(),
            heap: IndexedHeap::with_capacity(capacity),
        }
    }

    /// Builds a queue from parallel task and priority sequences.
    ///
    /// The heap is built with a single heapify pass and the index is then
    /// filled by scanning the finished array, which is cheaper than
    /// repeated single inserts.
    ///
    /// Task ids must be unique and the sequences must have equal length.
    ///
    /// # Panics
    ///
    /// Panics if the two sequences differ in length.
    pub fn from_parallel(tasks: Vec<I>, priorities: Vec<i64>) -> Self {
        let heap = IndexedHeap::from_parallel(tasks, priorities);
        let mut index = AvlIndex::new();
        for (slot, _, task) in heap.entries() {
            index.insert(task.clone(), slot);
        }
        Self { index, heap }
    }

    /// Inserts a task with the given priority.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::DuplicateTask`] if the id is already live;
    /// neither structure is modified in that case.
    pub fn insert(&mut self, id: I, priority: i64) -> Result<(), QueueError> {
        // index first, with a placeholder slot; the heap's relocation
        // report supplies the real one
        if !self.index.insert(id.clone(), 0) {
            return Err(QueueError::DuplicateTask);
        }
        let moves = self.heap.insert(id, priority);
        self.apply(moves);
        Ok(())
    }

    /// Returns the task with the smallest priority without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Underflow`] if the queue is empty.
    pub fn find_min(&self) -> Result<&I, QueueError> {
        self.heap
            .peek()
            .map(|(task, _)| task)
            .ok_or(QueueError::Underflow)
    }

    /// Removes and returns the task with the smallest priority.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Underflow`] if the queue is empty.
    pub fn delete_min(&mut self) -> Result<I, QueueError> {
        let (task, moves) = self.heap.delete_min().ok_or(QueueError::Underflow)?;
        let removed = self.index.remove(&task);
        debug_assert!(removed, "heap root was not indexed");
        self.apply(moves);
        Ok(task)
    }

    /// Changes the priority of a task, inserting it if absent.
    ///
    /// A live task is repaired in place: its slot comes from the index and
    /// the heap sifts locally from there. An unknown id behaves exactly
    /// like [`insert`](PriorityQueue::insert) and cannot fail.
    pub fn update_priority(&mut self, id: I, priority: i64) -> Result<(), QueueError> {
        match self.index.slot(&id) {
            Some(slot) => {
                let moves = self.heap.change_priority(slot, priority);
                debug_assert!(moves.is_some(), "indexed slot out of heap range");
                if let Some(moves) = moves {
                    self.apply(moves);
                }
                Ok(())
            }
            None => self.insert(id, priority),
        }
    }

    /// Returns the current priority of a task.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::UnknownTask`] if the id is not live.
    pub fn priority_of(&self, id: &I) -> Result<i64, QueueError> {
        self.index
            .slot(id)
            .and_then(|slot| self.heap.priority_at(slot))
            .ok_or(QueueError::UnknownTask)
    }

    /// Returns `true` if the task is live in the queue.
    pub fn contains(&self, id: &I) -> bool {
        self.index.contains(id)
    }

    /// Returns the number of live tasks.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every task from both structures.
    pub fn make_empty(&mut self) {
        self.index.clear();
        self.heap.clear();
    }

    /// Read-only view of the id-to-slot index, for diagnostics.
    pub fn index(&self) -> &AvlIndex<I> {
        &self.index
    }

    /// Read-only view of the underlying heap, for diagnostics.
    pub fn heap(&self) -> &IndexedHeap<I> {
        &self.heap
    }

    fn apply(&mut self, moves: Relocations<I>) {
        for (task, slot) in moves {
            let known = self.index.set_slot(&task, slot);
            debug_assert!(known, "heap relocated a task missing from the index");
        }
    }
}

/// Diagnostic dump: the index in id order with recorded slots, then the
/// heap array in slot order with priorities.
impl<I: Ord + Clone + fmt::Display> fmt::Display for PriorityQueue<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "empty queue");
        }
        writeln!(f, "index (by id):")?;
        for (id, slot) in self.index.iter() {
            writeln!(f, "  task {id} -> slot {slot}")?;
        }
        writeln!(f, "heap (by slot):")?;
        for (slot, priority, task) in self.heap.entries() {
            writeln!(f, "  {slot}) priority {priority} (task {task})")?;
        }
        Ok(())
    }
}
