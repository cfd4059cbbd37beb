//! Property-based tests using proptest
//!
//! These tests generate random operation sequences and verify that every
//! structural invariant of the queue holds after every public operation:
//! heap order, AVL height feasibility, the cross-reference between the
//! index and the heap, minimum correctness against a model map, and size
//! conservation.

use proptest::prelude::*;
use std::collections::BTreeMap;

use indexed_pq::{PriorityQueue, QueueError};

#[derive(Debug, Clone)]
enum Op {
    Insert(u8, i64),
    DeleteMin,
    UpdatePriority(u8, i64),
    MakeEmpty,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // ids drawn from a small range so inserts collide and updates hit
    prop_oneof![
        4 => (0u8..32, -50i64..50).prop_map(|(id, p)| Op::Insert(id, p)),
        3 => (0u8..32, -50i64..50).prop_map(|(id, p)| Op::UpdatePriority(id, p)),
        3 => Just(Op::DeleteMin),
        1 => Just(Op::MakeEmpty),
    ]
}

/// Smallest number of nodes an AVL tree of the given height can have
/// (N(0) = 1, N(1) = 2, N(h) = N(h-1) + N(h-2) + 1).
fn min_nodes_for_height(height: i32) -> u64 {
    match height {
        0 => 1,
        1 => 2,
        _ => {
            let (mut a, mut b) = (1u64, 2u64);
            for _ in 2..=height {
                let next = a + b + 1;
                a = b;
                b = next;
            }
            b
        }
    }
}

fn audit(queue: &PriorityQueue<u8>, model: &BTreeMap<u8, i64>) -> Result<(), TestCaseError> {
    // size conservation
    prop_assert_eq!(queue.len(), model.len());
    prop_assert_eq!(queue.index().len(), model.len());
    prop_assert_eq!(queue.is_empty(), model.is_empty());

    // cross-reference: the recorded slot of every id resolves to that id,
    // and the priority stored there matches the model
    for (id, slot) in queue.index().iter() {
        prop_assert_eq!(queue.heap().task_at(slot), Some(id));
        prop_assert_eq!(queue.heap().priority_at(slot), model.get(id).copied());
    }

    // heap order
    for (slot, priority, _) in queue.heap().entries() {
        if slot > 1 {
            let parent = queue.heap().priority_at(slot / 2);
            prop_assert!(parent.is_some_and(|p| p <= priority));
        }
    }

    // the index stays AVL-shaped: its height is feasible for its size,
    // and in-order iteration yields strictly ascending ids
    let height = queue.index().height();
    if model.is_empty() {
        prop_assert_eq!(height, -1);
    } else {
        prop_assert!(min_nodes_for_height(height) <= model.len() as u64);
    }
    let ids: Vec<u8> = queue.index().iter().map(|(id, _)| *id).collect();
    prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));

    // minimum correctness
    match model.values().min() {
        Some(&expected) => {
            let min_id = *queue
                .find_min()
                .map_err(|e| TestCaseError::fail(format!("find_min on non-empty queue: {e}")))?;
            prop_assert_eq!(model.get(&min_id).copied(), Some(expected));
        }
        None => prop_assert_eq!(queue.find_min(), Err(QueueError::Underflow)),
    }

    Ok(())
}

fn run_ops(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut queue = PriorityQueue::new();
    let mut model: BTreeMap<u8, i64> = BTreeMap::new();

    for op in ops {
        match op {
            Op::Insert(id, priority) => {
                let result = queue.insert(id, priority);
                if model.contains_key(&id) {
                    prop_assert_eq!(result, Err(QueueError::DuplicateTask));
                } else {
                    prop_assert_eq!(result, Ok(()));
                    model.insert(id, priority);
                }
            }
            Op::DeleteMin => match queue.delete_min() {
                Ok(task) => {
                    let expected = model.values().min().copied();
                    prop_assert_eq!(model.get(&task).copied(), expected);
                    model.remove(&task);
                }
                Err(e) => {
                    prop_assert_eq!(e, QueueError::Underflow);
                    prop_assert!(model.is_empty());
                }
            },
            Op::UpdatePriority(id, priority) => {
                prop_assert_eq!(queue.update_priority(id, priority), Ok(()));
                model.insert(id, priority);
            }
            Op::MakeEmpty => {
                queue.make_empty();
                model.clear();
            }
        }
        audit(&queue, &model)?;
    }

    // drain: priorities must come out in non-decreasing order
    let mut last = i64::MIN;
    while !queue.is_empty() {
        let min_id = *queue
            .find_min()
            .map_err(|e| TestCaseError::fail(format!("find_min on non-empty queue: {e}")))?;
        let priority = queue
            .priority_of(&min_id)
            .map_err(|e| TestCaseError::fail(format!("priority_of the minimum: {e}")))?;
        prop_assert!(priority >= last);
        last = priority;

        prop_assert_eq!(queue.delete_min(), Ok(min_id));
        model.remove(&min_id);
        audit(&queue, &model)?;
    }
    prop_assert!(model.is_empty());

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn invariants_hold_after_every_operation(ops in prop::collection::vec(op_strategy(), 1..120)) {
        run_ops(ops)?;
    }

    #[test]
    fn bulk_construction_matches_incremental_inserts(
        entries in prop::collection::btree_map(any::<u8>(), -50i64..50, 0..48)
    ) {
        let ids: Vec<u8> = entries.keys().copied().collect();
        let priorities: Vec<i64> = entries.values().copied().collect();

        let mut bulk = PriorityQueue::from_parallel(ids.clone(), priorities.clone());
        audit(&bulk, &entries)?;

        let mut incremental = PriorityQueue::new();
        for (id, priority) in ids.iter().zip(&priorities) {
            prop_assert_eq!(incremental.insert(*id, *priority), Ok(()));
        }

        // the two layouts may differ, but the drained priority sequences
        // must be identical (ties may drain different ids at each step)
        let mut model = entries.clone();
        while let Ok(a) = bulk.delete_min() {
            let b = incremental
                .delete_min()
                .map_err(|e| TestCaseError::fail(format!("incremental queue ran dry early: {e}")))?;
            prop_assert_eq!(entries.get(&a).copied(), entries.get(&b).copied());
            model.remove(&a);
            audit(&bulk, &model)?;
        }
        prop_assert!(incremental.is_empty());
    }

    #[test]
    fn insert_then_delete_min_returns_the_unique_minimum(
        entries in prop::collection::btree_map(0u8..100, 0i64..50, 1..32),
        new_id in 200u8..=254,
    ) {
        let mut queue = PriorityQueue::new();
        for (id, priority) in &entries {
            prop_assert_eq!(queue.insert(*id, *priority), Ok(()));
        }
        // strictly below every live priority, so the round trip is exact
        prop_assert_eq!(queue.insert(new_id, -1), Ok(()));
        prop_assert_eq!(queue.delete_min(), Ok(new_id));
        prop_assert_eq!(queue.len(), entries.len());
    }
}
