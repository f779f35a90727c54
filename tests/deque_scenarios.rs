use dlinked_list::{DLinkedList, DListError, ListConfig};
use proptest::prelude::*;
use std::rc::Rc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn mixed_end_insertions_keep_logical_order() {
    init_tracing();
    let mut list = DLinkedList::new(0).unwrap();
    list.append("A");
    list.append("B");
    list.prepend("C");

    assert_eq!(list.length(), 3);
    assert_eq!(list.first(), Some(&"C"));
    assert_eq!(list.last(), Some(&"B"));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["C", "A", "B"]);
}

#[test]
fn preallocated_nodes_are_used_before_growing() {
    init_tracing();
    let mut list = DLinkedList::new(3).unwrap();
    assert_eq!(list.capacity(), 3);
    assert_eq!(list.length(), 0);

    list.append('X');
    assert_eq!(list.capacity(), 3);
    list.append('Y');
    list.append('Z');
    assert_eq!(list.capacity(), 3);
    list.append('W');
    assert_eq!(list.capacity(), 4);
    assert_eq!(list.length(), 4);
}

#[test]
fn append_then_removehi_restores_state() {
    let mut list: DLinkedList<u32> = DLinkedList::new(2).unwrap();
    list.append(1);
    let (len, last, capacity) = (list.length(), list.last().copied(), list.capacity());

    list.append(2);
    assert_eq!(list.removehi(), Some(2));

    assert_eq!(list.length(), len);
    assert_eq!(list.last().copied(), last);
    assert_eq!(list.capacity(), capacity);
}

#[test]
fn queue_usage_cycles_without_growth() {
    let mut queue = DLinkedList::new(4).unwrap();
    for round in 0..100u32 {
        queue.append(round);
        queue.append(round + 1);
        assert_eq!(queue.removelo(), Some(round));
        assert_eq!(queue.removelo(), Some(round + 1));
    }
    assert_eq!(queue.capacity(), 4);
    assert!(queue.is_empty());
    assert_eq!(queue.removelo(), None);
}

#[test]
fn stack_usage_never_grows_past_peak() {
    let mut stack = DLinkedList::new(2).unwrap();
    for _ in 0..50 {
        for i in 0..5 {
            stack.append(i);
        }
        for i in (0..5).rev() {
            assert_eq!(stack.removehi(), Some(i));
        }
    }
    assert_eq!(stack.capacity(), 5);
    assert_eq!(stack.slack(), 5);
}

#[test]
fn interior_remove_shrinks_capacity_ends_do_not() {
    let mut list: DLinkedList<i32> = (0..5).collect();
    assert_eq!(list.remove(2), Ok(2));
    assert_eq!((list.length(), list.capacity()), (4, 4));

    assert_eq!(list.removehi(), Some(4));
    assert_eq!(list.removelo(), Some(0));
    assert_eq!((list.length(), list.capacity()), (2, 4));
}

#[test]
fn out_of_range_on_empty_and_non_empty() {
    let mut empty: DLinkedList<u8> = DLinkedList::new(4).unwrap();
    assert_eq!(empty.get(0), Err(DListError::OutOfRange { index: 0, len: 0 }));
    assert_eq!(empty.remove(0), Err(DListError::OutOfRange { index: 0, len: 0 }));
    assert_eq!(empty.set(1, 1), Err(DListError::OutOfRange { index: 1, len: 0 }));

    let mut list: DLinkedList<u8> = [1, 2, 3].into_iter().collect();
    assert_eq!(list.get(3), Err(DListError::OutOfRange { index: 3, len: 3 }));
    assert_eq!(list.remove(7), Err(DListError::OutOfRange { index: 7, len: 3 }));
    assert_eq!(list.set(9, 4), Err(DListError::OutOfRange { index: 4, len: 3 }));
    assert_eq!(list.length(), 3);
}

#[test]
fn invalid_hints_are_rejected() {
    assert!(matches!(
        DLinkedList::<u8>::try_from_hint(-5),
        Err(DListError::InvalidArgument { .. })
    ));
    assert!(matches!(
        DLinkedList::<u8>::new(ListConfig::DEFAULT_MAX_HINT + 1),
        Err(DListError::InvalidArgument { .. })
    ));
    assert!(matches!(
        DLinkedList::<u8>::with_config(ListConfig::new(3).with_max_hint(2)),
        Err(DListError::InvalidArgument { .. })
    ));
}

#[test]
fn free_with_live_elements_tears_down() {
    init_tracing();
    let payload = Rc::new(vec![1u8, 2, 3]);
    let mut list = DLinkedList::new(1).unwrap();
    list.append(Rc::clone(&payload));
    list.prepend(Rc::clone(&payload));
    assert_eq!(Rc::strong_count(&payload), 3);

    list.free();
    assert_eq!(Rc::strong_count(&payload), 1);
}

#[test]
fn steady_queue_reuses_front_slack() {
    let mut queue = DLinkedList::new(4).unwrap();
    queue.append(0u32);
    for i in 1..1000 {
        queue.append(i);
        assert_eq!(queue.removelo(), Some(i - 1));
    }
    assert_eq!(queue.length(), 1);
    assert_eq!(queue.capacity(), 4);
}

proptest! {
    #[test]
    fn appended_elements_read_back_in_order(
        hint in 0usize..8,
        values in proptest::collection::vec(any::<i64>(), 0..128),
    ) {
        let mut list = DLinkedList::new(hint).unwrap();
        for v in &values {
            list.append(*v);
        }
        prop_assert_eq!(list.length(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(list.get(i), Ok(v));
        }
        prop_assert!(list.get(values.len()).is_err());
    }

    #[test]
    fn fifo_cycling_stays_within_high_water_mark(
        hint in 0usize..8,
        ops in proptest::collection::vec(any::<bool>(), 0..512),
    ) {
        let mut queue = DLinkedList::new(hint).unwrap();
        let mut high_water = 0usize;
        let mut next = 0u32;
        let mut expected_front = 0u32;

        for push in ops {
            if push {
                queue.append(next);
                next += 1;
            } else if let Some(v) = queue.removelo() {
                prop_assert_eq!(v, expected_front);
                expected_front += 1;
            }
            high_water = high_water.max(queue.length());
            prop_assert!(queue.capacity() <= hint.max(high_water));
        }
    }

    #[test]
    fn length_tracks_inserts_minus_removes(
        ops in proptest::collection::vec(0u8..4, 0..256),
    ) {
        let mut list = DLinkedList::new(0).unwrap();
        let mut expected = 0usize;
        for op in ops {
            match op {
                0 => { list.append(op); expected += 1; }
                1 => { list.prepend(op); expected += 1; }
                2 => if list.removehi().is_some() { expected -= 1; },
                _ => if list.removelo().is_some() { expected -= 1; },
            }
            prop_assert_eq!(list.length(), expected);
        }
    }
}
