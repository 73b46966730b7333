//! Property-based tests for the ordering core
//!
//! The density invariant must hold after any sequence of reorders,
//! insertions, and removals, and a reorder must be exactly undone by the
//! opposite reorder.

use proptest::prelude::*;
use uuid::Uuid;

use boardkit::shared::ordering::{
    insert_at, remove_and_close_gap, reorder, verify_dense, InsertPolicy, OrderedItem,
};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: Uuid,
    position: u32,
}

impl Item {
    fn new(position: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
        }
    }
}

impl OrderedItem for Item {
    fn item_id(&self) -> Uuid {
        self.id
    }
    fn position(&self) -> u32 {
        self.position
    }
    fn set_position(&mut self, position: u32) {
        self.position = position;
    }
}

fn group(n: usize) -> Vec<Item> {
    (0..n).map(|i| Item::new(i as u32)).collect()
}

#[derive(Debug, Clone)]
enum Op {
    Reorder { index: usize, target: i64 },
    Insert { target: i64 },
    Remove { index: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<usize>(), -5i64..40).prop_map(|(index, target)| Op::Reorder { index, target }),
        (-5i64..40).prop_map(|target| Op::Insert { target }),
        any::<usize>().prop_map(|index| Op::Remove { index }),
    ]
}

proptest! {
    /// Any sequence of clamped reorders keeps the group dense and keeps
    /// the same members.
    #[test]
    fn density_survives_reorders(
        size in 1usize..10,
        moves in prop::collection::vec((any::<usize>(), -5i64..40), 0..25),
    ) {
        let mut items = group(size);
        let mut ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();
        ids.sort();

        for (index, target) in moves {
            let moved = items[index % items.len()].id;
            reorder(&mut items, moved, target, InsertPolicy::Clamp).unwrap();
            verify_dense(&items).unwrap();
        }

        let mut after: Vec<Uuid> = items.iter().map(|i| i.id).collect();
        after.sort();
        prop_assert_eq!(ids, after);
    }

    /// Density also survives arbitrary interleavings of reorders,
    /// insertions, and removals.
    #[test]
    fn density_survives_mixed_operations(
        size in 0usize..8,
        ops in prop::collection::vec(op_strategy(), 0..30),
    ) {
        let mut items = group(size);

        for op in ops {
            match op {
                Op::Reorder { index, target } => {
                    if items.is_empty() {
                        continue;
                    }
                    let moved = items[index % items.len()].id;
                    reorder(&mut items, moved, target, InsertPolicy::Clamp).unwrap();
                }
                Op::Insert { target } => {
                    insert_at(&mut items, Item::new(0), target, InsertPolicy::Clamp).unwrap();
                }
                Op::Remove { index } => {
                    if items.is_empty() {
                        continue;
                    }
                    let removed = items[index % items.len()].id;
                    remove_and_close_gap(&mut items, removed).unwrap();
                }
            }
            verify_dense(&items).unwrap();
        }
    }

    /// Moving an item and moving it back restores the original ordering of
    /// every item in the group.
    #[test]
    fn reorder_round_trip_is_identity(
        size in 2usize..10,
        index in any::<usize>(),
        target in any::<usize>(),
    ) {
        let mut items = group(size);
        let original = items.clone();
        let index = index % size;
        let target = (target % size) as i64;
        let moved = items[index].id;

        reorder(&mut items, moved, target, InsertPolicy::Reject).unwrap();
        reorder(&mut items, moved, index as i64, InsertPolicy::Reject).unwrap();

        prop_assert_eq!(items, original);
    }

    /// A no-op reorder changes nothing at all.
    #[test]
    fn noop_reorder_is_identity(size in 1usize..10, index in any::<usize>()) {
        let mut items = group(size);
        let original = items.clone();
        let index = index % size;
        let moved = items[index].id;

        let changed = reorder(&mut items, moved, index as i64, InsertPolicy::Reject).unwrap();

        prop_assert!(changed.is_empty());
        prop_assert_eq!(items, original);
    }
}
