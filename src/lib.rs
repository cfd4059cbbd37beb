//! Updatable Priority Queue with an AVL-Tree Cross-Index
//!
//! This crate provides a priority queue of unique task identifiers that
//! supports minimum lookup/removal *and* in-place priority changes by id in
//! O(log n), by pairing two structures that rearrange independently:
//!
//! - [`IndexedHeap`]: an array-backed binary min-heap of `(priority, task)`
//!   pairs, ordered by priority, addressed by 1-based slot numbers
//! - [`AvlIndex`]: an AVL tree keyed by task id, storing each id's current
//!   heap slot
//! - [`PriorityQueue`]: the composition, which keeps every recorded slot
//!   equal to the task's true heap position after every mutation
//!
//! An ordinary binary heap answers "which task is most urgent" but not
//! "where is task X", so it cannot change an arbitrary task's priority
//! without a linear scan. The cross-index answers that question in
//! O(log n), and the heap reports exactly which entries each repair walk
//! displaced so the index can be patched instead of rebuilt.
//!
//! # Example
//!
//! ```rust
//! use indexed_pq::PriorityQueue;
//!
//! let mut queue = PriorityQueue::from_parallel(
//!     vec!["deploy", "test", "build"],
//!     vec![30, 20, 10],
//! );
//!
//! assert_eq!(queue.find_min(), Ok(&"build"));
//!
//! // a task's priority can change while it is queued
//! queue.update_priority("deploy", 5)?;
//! assert_eq!(queue.delete_min()?, "deploy");
//! assert_eq!(queue.delete_min()?, "build");
//! assert_eq!(queue.delete_min()?, "test");
//! # Ok::<(), indexed_pq::QueueError>(())
//! ```
//!
//! Smaller priority means more urgent. The queue is single-threaded and
//! in-memory; callers needing concurrent access must serialize externally.

pub mod avl;
pub mod error;
pub mod heap;
pub mod queue;

// Re-export the main types for convenience
pub use avl::AvlIndex;
pub use error::QueueError;
pub use heap::{IndexedHeap, Relocations, Slot};
pub use queue::PriorityQueue;
