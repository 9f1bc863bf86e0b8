use pretty_assertions::assert_eq;

use super::*;

crate::define_id! {
    struct TestId;
}

#[test]
fn allocate_and_get() {
    let mut arena: Indexed<String, TestId> = Indexed::new();
    let a = arena.allocate_with("a".to_string());
    let b = arena.allocate_with("b".to_string());
    assert_eq!(arena.get(a), "a");
    assert_eq!(arena.get(b), "b");
    assert_eq!(arena.len(), 2);
}

#[test]
fn allocate_default() {
    let mut arena: Indexed<Vec<u32>, TestId> = Indexed::new();
    let id = arena.allocate();
    assert!(arena.get(id).is_empty());
    arena.get_mut(id).push(3);
    assert_eq!(arena.take(id), vec![3]);
    assert!(arena.is_empty());
}

#[test]
fn take_kills_handle() {
    let mut arena: Indexed<u32, TestId> = Indexed::new();
    let id = arena.allocate_with(7);
    assert_eq!(arena.take(id), 7);
    assert!(!arena.contains(id));
    let err = arena.try_get(id).unwrap_err();
    assert_eq!(err.reason, StaleReason::Taken);
}

#[test]
fn reused_slot_rejects_old_handle() {
    let mut arena: Indexed<u32, TestId> = Indexed::new();
    let old = arena.allocate_with(1);
    arena.take(old);
    let new = arena.allocate_with(2);

    // Same slot, newer generation.
    assert_eq!(old.index(), new.index());
    assert_ne!(old.generation(), new.generation());

    assert_eq!(arena.try_get(old).unwrap_err().reason, StaleReason::Reused);
    assert_eq!(*arena.get(new), 2);
}

#[test]
fn foreign_handle_is_out_of_bounds() {
    let arena: Indexed<u32, TestId> = Indexed::new();
    let id = TestId::from_parts(4, 0);
    assert_eq!(arena.try_get(id).unwrap_err().reason, StaleReason::OutOfBounds);
}

#[test]
fn double_take_is_reported() {
    let mut arena: Indexed<u32, TestId> = Indexed::new();
    let id = arena.allocate_with(1);
    arena.take(id);
    assert_eq!(arena.try_take(id).unwrap_err().reason, StaleReason::Taken);
    assert_eq!(arena.len(), 0);
}

#[test]
#[should_panic(expected = "stale handle TestId(0@0): value was already taken")]
fn get_after_take_panics() {
    let mut arena: Indexed<u32, TestId> = Indexed::new();
    let id = arena.allocate_with(1);
    arena.take(id);
    let _ = arena.get(id);
}

#[test]
fn debug_format() {
    let id = TestId::from_parts(3, 2);
    assert_eq!(format!("{id:?}"), "TestId(3@2)");
}

mod proptest_arena {
    use super::super::Indexed;
    use super::TestId;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn take_returns_allocated_value(values in proptest::collection::vec(any::<i64>(), 1..64)) {
            let mut arena: Indexed<i64, TestId> = Indexed::new();
            let ids: Vec<TestId> = values.iter().map(|v| arena.allocate_with(*v)).collect();
            for (id, value) in ids.iter().zip(&values) {
                prop_assert_eq!(arena.take(*id), *value);
                prop_assert!(!arena.contains(*id));
            }
            prop_assert!(arena.is_empty());
        }

        #[test]
        fn interleaved_reuse_never_aliases(
            ops in proptest::collection::vec(any::<bool>(), 1..128)
        ) {
            let mut arena: Indexed<usize, TestId> = Indexed::new();
            let mut live: Vec<(TestId, usize)> = Vec::new();
            let mut dead: Vec<TestId> = Vec::new();
            for (step, allocate) in ops.into_iter().enumerate() {
                if allocate || live.is_empty() {
                    live.push((arena.allocate_with(step), step));
                } else {
                    let (id, value) = live.swap_remove(0);
                    prop_assert_eq!(arena.take(id), value);
                    dead.push(id);
                }
            }
            for (id, value) in &live {
                prop_assert_eq!(arena.get(*id), value);
            }
            for id in &dead {
                prop_assert!(arena.try_get(*id).is_err());
            }
            prop_assert_eq!(arena.len(), live.len());
        }
    }
}
