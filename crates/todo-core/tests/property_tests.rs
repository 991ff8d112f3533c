//! Property-based checks for `TaskStore`.
//!
//! Uses proptest to verify:
//! 1. Every successful add returns an id above all earlier ids.
//! 2. Pending and completed listings partition the full listing.
//! 3. `clear_completed` removes exactly the completed tasks.

use std::collections::HashSet;

use proptest::prelude::*;
use todo_core::{TaskId, TaskStore};

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Complete(u64),
    Remove(u64),
}

/// Descriptions, including blank ones that must be rejected.
fn arb_description() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z ]{0,20}",
        " {0,4}",
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_description().prop_map(Op::Add),
        2 => (1u64..20).prop_map(Op::Complete),
        1 => (1u64..20).prop_map(Op::Remove),
    ]
}

fn apply(store: &mut TaskStore, ops: &[Op]) {
    for op in ops {
        let _ = match op {
            Op::Add(d) => store.add(d, None).map(|_| ()),
            Op::Complete(id) => store.complete(TaskId(*id)),
            Op::Remove(id) => store.remove(TaskId(*id)),
        };
    }
}

proptest! {
    #[test]
    fn ids_strictly_increase(descriptions in prop::collection::vec(arb_description(), 0..40)) {
        let mut store = TaskStore::new();
        let mut last = 0u64;
        for d in &descriptions {
            match store.add(d, None) {
                Ok(task) => {
                    prop_assert!(task.id.get() > last);
                    last = task.id.get();
                }
                Err(e) => {
                    prop_assert!(e.is_validation());
                    prop_assert!(d.trim().is_empty());
                }
            }
        }
    }

    #[test]
    fn status_filters_partition_list(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut store = TaskStore::new();
        apply(&mut store, &ops);

        let all: HashSet<TaskId> = store.list().iter().map(|t| t.id).collect();
        let done: HashSet<TaskId> = store.filter_by_status(true).iter().map(|t| t.id).collect();
        let pending: HashSet<TaskId> = store.filter_by_status(false).iter().map(|t| t.id).collect();

        prop_assert!(done.is_disjoint(&pending));
        prop_assert_eq!(done.len() + pending.len(), all.len());
        prop_assert_eq!(&done | &pending, all);
    }

    #[test]
    fn clear_completed_removes_exactly_done(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut store = TaskStore::new();
        apply(&mut store, &ops);

        let done = store.filter_by_status(true).len();
        let pending = store.filter_by_status(false);

        prop_assert_eq!(store.clear_completed(), done);
        prop_assert_eq!(store.clear_completed(), 0);
        prop_assert_eq!(store.list(), pending);
    }
}
