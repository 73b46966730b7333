//! Dense position maintenance for ordered sibling collections.
//!
//! Lists within a board and cards within a list carry a zero-based
//! `position`. For a group of N items the positions must be exactly
//! `{0, 1, ..., N-1}` — no gaps, no duplicates. Every insertion, removal,
//! and reorder goes through this module so the invariant survives the
//! operation.
//!
//! The functions here are pure: they operate on an in-memory snapshot of a
//! single group and perform no I/O. Callers are responsible for loading
//! the group, serializing concurrent mutations, and persisting the result.

use thiserror::Error;
use uuid::Uuid;

/// An entity that participates in a dense ordering within its group.
pub trait OrderedItem {
    /// Stable identifier of the item.
    fn item_id(&self) -> Uuid;
    /// Current zero-based position within the group.
    fn position(&self) -> u32;
    /// Assign a new position.
    fn set_position(&mut self, position: u32);
}

/// How to treat a requested position outside the valid range.
///
/// Drag-and-drop clients routinely report indexes past the end of the
/// collection (drop below the last row) or negative ones; `Clamp` folds
/// those onto the nearest valid slot. `Reject` fails the operation instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPolicy {
    /// Negative positions become 0, past-the-end positions append.
    Clamp,
    /// Out-of-range positions fail with [`OrderingError::PositionOutOfRange`].
    Reject,
}

/// Errors produced by ordering operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderingError {
    /// The item is not a member of the stated group.
    #[error("item {item_id} not found in its group")]
    ItemNotFound {
        /// Identifier that failed to resolve
        item_id: Uuid,
    },

    /// The requested position is outside `0..=max` under [`InsertPolicy::Reject`].
    #[error("position {requested} outside valid range 0..={max}")]
    PositionOutOfRange {
        /// Position the caller asked for
        requested: i64,
        /// Largest index valid for this operation
        max: usize,
    },

    /// The group's positions are not `{0, ..., N-1}`.
    #[error("positions are not dense: {detail}")]
    NotDense {
        /// Which position is duplicated or missing
        detail: String,
    },
}

/// Sort a group by its current positions.
///
/// Ties (which only exist when the invariant is already broken) are settled
/// by item id so the outcome stays deterministic.
pub fn sort_by_position<T: OrderedItem>(items: &mut [T]) {
    items.sort_by_key(|item| (item.position(), item.item_id()));
}

/// Walk the sequence assigning `position = index`.
///
/// Returns the ids of items whose position actually changed, which is what
/// a caller needs to persist.
pub fn reindex<T: OrderedItem>(items: &mut [T]) -> Vec<Uuid> {
    let mut changed = Vec::new();
    for (index, item) in items.iter_mut().enumerate() {
        let index = index as u32;
        if item.position() != index {
            item.set_position(index);
            changed.push(item.item_id());
        }
    }
    changed
}

/// Check that positions form exactly `{0, ..., N-1}`.
pub fn verify_dense<T: OrderedItem>(items: &[T]) -> Result<(), OrderingError> {
    let mut positions: Vec<u32> = items.iter().map(|item| item.position()).collect();
    positions.sort_unstable();
    for (index, position) in positions.iter().enumerate() {
        let expected = index as u32;
        if *position != expected {
            let detail = if *position < expected {
                format!("position {} held by more than one item", position)
            } else {
                format!("position {} is missing", expected)
            };
            return Err(OrderingError::NotDense { detail });
        }
    }
    Ok(())
}

fn resolve_index(
    requested: i64,
    max: usize,
    policy: InsertPolicy,
) -> Result<usize, OrderingError> {
    if requested < 0 {
        return match policy {
            InsertPolicy::Clamp => Ok(0),
            InsertPolicy::Reject => Err(OrderingError::PositionOutOfRange { requested, max }),
        };
    }
    let requested_index = requested as usize;
    if requested_index > max {
        return match policy {
            InsertPolicy::Clamp => Ok(max),
            InsertPolicy::Reject => Err(OrderingError::PositionOutOfRange { requested, max }),
        };
    }
    Ok(requested_index)
}

/// Move an existing member of the group to `requested` and recompute all
/// positions densely.
///
/// The sequence is sorted by current position, the item is removed and
/// re-inserted at the resolved index, and every position is rewritten as
/// its index. Returns the ids whose position changed.
pub fn reorder<T: OrderedItem>(
    items: &mut Vec<T>,
    item_id: Uuid,
    requested: i64,
    policy: InsertPolicy,
) -> Result<Vec<Uuid>, OrderingError> {
    sort_by_position(items);
    let current = items
        .iter()
        .position(|item| item.item_id() == item_id)
        .ok_or(OrderingError::ItemNotFound { item_id })?;
    let item = items.remove(current);
    // After removal the valid insertion indexes are 0..=len, where len is
    // the last position of the final N-item sequence.
    let target = match resolve_index(requested, items.len(), policy) {
        Ok(target) => target,
        Err(err) => {
            // Put the sequence back the way we found it before failing.
            items.insert(current, item);
            return Err(err);
        }
    };
    items.insert(target, item);
    let changed = reindex(items);
    verify_dense(items)?;
    Ok(changed)
}

/// Remove a member and close the gap it leaves.
///
/// Returns the removed item together with the ids of survivors whose
/// position changed.
pub fn remove_and_close_gap<T: OrderedItem>(
    items: &mut Vec<T>,
    item_id: Uuid,
) -> Result<(T, Vec<Uuid>), OrderingError> {
    sort_by_position(items);
    let current = items
        .iter()
        .position(|item| item.item_id() == item_id)
        .ok_or(OrderingError::ItemNotFound { item_id })?;
    let removed = items.remove(current);
    let changed = reindex(items);
    verify_dense(items)?;
    Ok((removed, changed))
}

/// Insert a new member at `requested` and recompute all positions densely.
///
/// Returns the ids whose position changed, including the inserted item.
pub fn insert_at<T: OrderedItem>(
    items: &mut Vec<T>,
    mut item: T,
    requested: i64,
    policy: InsertPolicy,
) -> Result<Vec<Uuid>, OrderingError> {
    sort_by_position(items);
    let target = resolve_index(requested, items.len(), policy)?;
    // The sentinel guarantees the inserted item shows up in the changed
    // set even when it lands on its previous position value.
    item.set_position(u32::MAX);
    items.insert(target, item);
    let changed = reindex(items);
    verify_dense(items)?;
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn group(n: u32) -> Vec<Item> {
        (0..n).map(Item::new).collect()
    }

    fn ids(items: &[Item]) -> Vec<Uuid> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_reorder_moves_item_to_front() {
        // [A(0), B(1), C(2)], move B to 0 => [B(0), A(1), C(2)]
        let mut items = group(3);
        let (a, b, c) = (items[0].id, items[1].id, items[2].id);

        reorder(&mut items, b, 0, InsertPolicy::Reject).unwrap();

        assert_eq!(ids(&items), vec![b, a, c]);
        assert_eq!(
            items.iter().map(|i| i.position).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_reorder_is_dense_after_any_target() {
        let mut items = group(5);
        let moved = items[2].id;
        for target in 0..5 {
            reorder(&mut items, moved, target, InsertPolicy::Reject).unwrap();
            verify_dense(&items).unwrap();
            assert_eq!(items[target as usize].id, moved);
        }
    }

    #[test]
    fn test_reorder_noop_changes_nothing() {
        let mut items = group(4);
        let before = items.clone();
        let moved = items[2].id;

        let changed = reorder(&mut items, moved, 2, InsertPolicy::Reject).unwrap();

        assert!(changed.is_empty());
        assert_eq!(items, before);
    }

    #[test]
    fn test_reorder_round_trip_restores_order() {
        let mut items = group(4);
        let before = items.clone();
        let moved = items[2].id;

        reorder(&mut items, moved, 0, InsertPolicy::Reject).unwrap();
        reorder(&mut items, moved, 2, InsertPolicy::Reject).unwrap();

        assert_eq!(items, before);
    }

    #[test]
    fn test_reorder_to_boundaries() {
        let mut items = group(6);
        let moved = items[3].id;

        reorder(&mut items, moved, 0, InsertPolicy::Reject).unwrap();
        assert_eq!(items[0].id, moved);

        reorder(&mut items, moved, 5, InsertPolicy::Reject).unwrap();
        assert_eq!(items[5].id, moved);
        verify_dense(&items).unwrap();
    }

    #[test]
    fn test_reorder_unknown_item() {
        let mut items = group(3);
        let missing = Uuid::new_v4();

        let err = reorder(&mut items, missing, 0, InsertPolicy::Clamp).unwrap_err();
        assert_eq!(err, OrderingError::ItemNotFound { item_id: missing });
    }

    #[test]
    fn test_reorder_clamps_out_of_range() {
        let mut items = group(3);
        let moved = items[0].id;

        reorder(&mut items, moved, 99, InsertPolicy::Clamp).unwrap();
        assert_eq!(items[2].id, moved);

        reorder(&mut items, moved, -7, InsertPolicy::Clamp).unwrap();
        assert_eq!(items[0].id, moved);
        verify_dense(&items).unwrap();
    }

    #[test]
    fn test_reorder_rejects_out_of_range() {
        let mut items = group(3);
        let before = items.clone();
        let moved = items[1].id;

        let err = reorder(&mut items, moved, 3, InsertPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            OrderingError::PositionOutOfRange {
                requested: 3,
                max: 2
            }
        );
        // A rejected reorder must leave the group untouched.
        assert_eq!(items, before);

        let err = reorder(&mut items, moved, -1, InsertPolicy::Reject).unwrap_err();
        assert!(matches!(err, OrderingError::PositionOutOfRange { .. }));
        assert_eq!(items, before);
    }

    #[test]
    fn test_remove_closes_gap() {
        let mut items = group(4);
        let removed_id = items[1].id;

        let (removed, changed) = remove_and_close_gap(&mut items, removed_id).unwrap();

        assert_eq!(removed.id, removed_id);
        assert_eq!(items.len(), 3);
        assert_eq!(changed.len(), 2);
        verify_dense(&items).unwrap();
    }

    #[test]
    fn test_remove_last_changes_no_survivor() {
        let mut items = group(3);
        let last = items[2].id;

        let (_, changed) = remove_and_close_gap(&mut items, last).unwrap();

        assert!(changed.is_empty());
        verify_dense(&items).unwrap();
    }

    #[test]
    fn test_insert_makes_room() {
        let mut items = group(2);
        let (x, y) = (items[0].id, items[1].id);
        let incoming = Item::new(0);
        let incoming_id = incoming.id;

        // [X, Y] + C at 1 => [X, C, Y]
        let changed = insert_at(&mut items, incoming, 1, InsertPolicy::Reject).unwrap();

        assert_eq!(ids(&items), vec![x, incoming_id, y]);
        assert!(changed.contains(&incoming_id));
        verify_dense(&items).unwrap();
    }

    #[test]
    fn test_insert_append_and_clamp() {
        let mut items = group(2);
        let incoming = Item::new(0);
        let incoming_id = incoming.id;

        insert_at(&mut items, incoming, 50, InsertPolicy::Clamp).unwrap();
        assert_eq!(items[2].id, incoming_id);

        let into_empty = insert_at(
            &mut Vec::<Item>::new(),
            Item::new(7),
            0,
            InsertPolicy::Reject,
        );
        assert!(into_empty.is_ok());
    }

    #[test]
    fn test_insert_rejects_past_end() {
        let mut items = group(2);
        let err = insert_at(&mut items, Item::new(0), 3, InsertPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            OrderingError::PositionOutOfRange {
                requested: 3,
                max: 2
            }
        );
    }

    #[test]
    fn test_verify_dense_reports_duplicate_and_gap() {
        let mut duplicated = group(3);
        duplicated[2].position = 1;
        assert!(matches!(
            verify_dense(&duplicated),
            Err(OrderingError::NotDense { .. })
        ));

        let mut gapped = group(3);
        gapped[2].position = 5;
        assert!(matches!(
            verify_dense(&gapped),
            Err(OrderingError::NotDense { .. })
        ));

        assert!(verify_dense(&group(0)).is_ok());
        assert!(verify_dense(&group(1)).is_ok());
    }

    #[test]
    fn test_reindex_repairs_sparse_positions() {
        let mut items = group(3);
        items[0].position = 4;
        items[1].position = 9;
        items[2].position = 30;
        sort_by_position(&mut items);

        let changed = reindex(&mut items);

        assert_eq!(changed.len(), 3);
        verify_dense(&items).unwrap();
    }
}
