//! Array-backed binary min-heap with slot-stable semantics
//!
//! Unlike an ordinary heap, every mutating operation reports exactly which
//! entries it relocated and to where. A composing layer that keeps an
//! external task-to-slot index (see [`PriorityQueue`](crate::PriorityQueue))
//! can replay that report instead of rescanning the whole array, so a single
//! insert or delete costs O(log n) index maintenance rather than O(n).
//!
//! Slots are 1-based: the minimum lives at slot 1 and the children of slot
//! `s` are `2s` and `2s + 1`. The backing `Vec` grows by amortized doubling;
//! growth never disturbs the slot of a surviving entry.
//!
//! # Example
//!
//! ```rust
//! use indexed_pq::IndexedHeap;
//!
//! let mut heap = IndexedHeap::new();
//! heap.insert("low", 9);
//! let moves = heap.insert("high", 2);
//! // the report names the final resting slot of the new entry
//! assert!(moves.contains(&("high", 1)));
//! assert_eq!(heap.peek(), Some((&"high", 2)));
//! ```

use smallvec::SmallVec;

/// 1-based position of an entry in the heap array.
pub type Slot = usize;

/// `(task, new slot)` pairs displaced by a single heap repair walk.
///
/// Repair walks are at most logarithmic, so the report fits inline for
/// queues of a few hundred entries and only spills beyond that.
pub type Relocations<I> = SmallVec<[(I, Slot); 8]>;

#[derive(Debug, Clone)]
struct Entry<I> {
    priority: i64,
    task: I,
}

/// An array-backed binary min-heap of `(priority, task)` pairs.
///
/// Ordering is by priority alone; tasks are payload and are never compared.
/// Callers learn slot numbers from the [`Relocations`] reports and may feed
/// them back into [`change_priority`](IndexedHeap::change_priority) for
/// direct-index updates.
#[derive(Debug, Clone)]
pub struct IndexedHeap<I> {
    entries: Vec<Entry<I>>,
}

impl<I> Default for IndexedHeap<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> IndexedHeap<I> {
    const DEFAULT_CAPACITY: usize = 100;

    /// Creates an empty heap with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the heap.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the minimum-priority task and its priority without removing it.
    pub fn peek(&self) -> Option<(&I, i64)> {
        self.entries.first().map(|e| (&e.task, e.priority))
    }

    /// Returns the task at a 1-based slot, or `None` if the slot is vacant.
    pub fn task_at(&self, slot: Slot) -> Option<&I> {
        slot.checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|e| &e.task)
    }

    /// Returns the priority at a 1-based slot, or `None` if the slot is vacant.
    pub fn priority_at(&self, slot: Slot) -> Option<i64> {
        slot.checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|e| e.priority)
    }

    /// Iterates the occupied slots in slot order, starting at slot 1.
    pub fn entries(&self) -> impl Iterator<Item = (Slot, i64, &I)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (i + 1, e.priority, &e.task))
    }
}

impl<I: Clone> IndexedHeap<I> {
    /// Builds a heap from parallel task and priority sequences in one
    /// heapify pass, which is cheaper than repeated single inserts.
    ///
    /// # Panics
    ///
    /// Panics if the two sequences differ in length.
    pub fn from_parallel(tasks: Vec<I>, priorities: Vec<i64>) -> Self {
        assert_eq!(
            tasks.len(),
            priorities.len(),
            "one priority per task required"
        );
        let entries = priorities
            .into_iter()
            .zip(tasks)
            .map(|(priority, task)| Entry { priority, task })
            .collect();
        let mut heap = Self { entries };
        heap.build();
        heap
    }

    /// Inserts a task, sifting it up while its priority is strictly less
    /// than its parent's.
    ///
    /// The report names every displaced entry plus the final resting slot of
    /// the new task itself.
    pub fn insert(&mut self, task: I, priority: i64) -> Relocations<I> {
        self.entries.push(Entry { priority, task });
        self.sift_up(self.entries.len() - 1)
    }

    /// Removes and returns the minimum-priority task.
    ///
    /// The last entry is moved into the vacated root slot and sifted down,
    /// at each step swapping with the strictly smaller of its children.
    /// Returns `None` if the heap is empty.
    pub fn delete_min(&mut self) -> Option<(I, Relocations<I>)> {
        let last = self.entries.pop()?;
        if self.entries.is_empty() {
            return Some((last.task, Relocations::new()));
        }
        let removed = std::mem::replace(&mut self.entries[0], last);
        let moves = self.sift_down(0);
        Some((removed.task, moves))
    }

    /// Overwrites the priority at a 1-based slot and restores heap order
    /// with one localized sift: up when the priority decreased, down when it
    /// increased.
    ///
    /// Returns `None` if the slot is vacant.
    pub fn change_priority(&mut self, slot: Slot, priority: i64) -> Option<Relocations<I>> {
        let idx = slot.checked_sub(1).filter(|&i| i < self.entries.len())?;
        let old = self.entries[idx].priority;
        self.entries[idx].priority = priority;
        let moves = if priority < old {
            self.sift_up(idx)
        } else if priority > old {
            self.sift_down(idx)
        } else {
            Relocations::new()
        };
        Some(moves)
    }

    /// Re-establish heap order over the whole array, from the last internal
    /// node down to the root.
    fn build(&mut self) {
        for idx in (0..self.entries.len() / 2).rev() {
            self.sift_down(idx);
        }
    }

    /// Move the entry at `idx` up until its parent is no larger, recording
    /// each displaced ancestor and finally the entry itself.
    fn sift_up(&mut self, mut idx: usize) -> Relocations<I> {
        let mut moves = Relocations::new();
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[idx].priority < self.entries[parent].priority {
                self.entries.swap(idx, parent);
                moves.push((self.entries[idx].task.clone(), idx + 1));
                idx = parent;
            } else {
                break;
            }
        }
        moves.push((self.entries[idx].task.clone(), idx + 1));
        moves
    }

    /// Move the entry at `idx` down, swapping with the smaller child while
    /// that child is strictly smaller, recording each displaced child and
    /// finally the entry itself.
    fn sift_down(&mut self, mut idx: usize) -> Relocations<I> {
        let mut moves = Relocations::new();
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let mut child = left;
            let right = left + 1;
            if right < len && self.entries[right].priority < self.entries[left].priority {
                child = right;
            }
            if self.entries[child].priority < self.entries[idx].priority {
                self.entries.swap(idx, child);
                moves.push((self.entries[idx].task.clone(), idx + 1));
                idx = child;
            } else {
                break;
            }
        }
        moves.push((self.entries[idx].task.clone(), idx + 1));
        moves
    }
}
