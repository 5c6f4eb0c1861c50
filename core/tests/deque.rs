//! IndexedDeque container tests: reference-model equivalence and the
//! documented error contract.

use hrdesk_core::deque::{IndexedDeque, ResizeDirection};
use hrdesk_core::error::CoreError;
use hrdesk_core::rng::DeskRng;

fn assert_matches_reference(deque: &IndexedDeque<i32>, reference: &[i32]) {
    assert_eq!(deque.len(), reference.len(), "length diverged from reference");
    assert_eq!(deque.is_empty(), reference.is_empty());
    for (i, expected) in reference.iter().enumerate() {
        let got = deque.get(i).expect("index within bounds");
        assert_eq!(got, expected, "element {i} diverged from reference");
    }
    let collected: Vec<i32> = deque.iter().copied().collect();
    assert_eq!(collected, reference, "iteration order diverged");
}

#[test]
fn push_pop_both_ends_matches_reference_vec() {
    let mut deque = IndexedDeque::new();
    let mut reference: Vec<i32> = Vec::new();
    let mut rng = DeskRng::from_seed(2024);

    for value in 0..500 {
        match rng.below(6) {
            0 | 1 => {
                deque.push_back(value);
                reference.push(value);
            }
            2 => {
                deque.push_front(value);
                reference.insert(0, value);
            }
            3 => {
                let got = deque.pop_back().ok();
                assert_eq!(got, reference.pop());
            }
            4 => {
                let got = deque.pop_front().ok();
                let expected = if reference.is_empty() {
                    None
                } else {
                    Some(reference.remove(0))
                };
                assert_eq!(got, expected);
            }
            _ => {
                if !reference.is_empty() {
                    let i = rng.below(reference.len() as u64) as usize;
                    let got = deque.remove_at(i).expect("valid removal index");
                    assert_eq!(got, reference.remove(i));
                }
            }
        }
        assert_matches_reference(&deque, &reference);
    }
}

#[test]
fn insert_at_splices_between_neighbours() {
    let mut deque = IndexedDeque::new();
    for v in [1, 2, 4, 5] {
        deque.push_back(v);
    }
    deque.insert_at(2, 3).expect("interior insert");
    let values: Vec<i32> = deque.iter().copied().collect();
    assert_eq!(values, [1, 2, 3, 4, 5]);

    deque.insert_at(0, 0).expect("front insert");
    deque.insert_at(deque.len(), 6).expect("back insert");
    let values: Vec<i32> = deque.iter().copied().collect();
    assert_eq!(values, [0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn remove_at_splices_neighbours_together() {
    let mut deque = IndexedDeque::new();
    for v in 0..5 {
        deque.push_back(v);
    }
    assert_eq!(deque.remove_at(2).expect("interior removal"), 2);
    assert_eq!(deque.remove_at(0).expect("front removal"), 0);
    assert_eq!(deque.remove_at(deque.len() - 1).expect("back removal"), 4);
    let values: Vec<i32> = deque.iter().copied().collect();
    assert_eq!(values, [1, 3]);
}

#[test]
fn empty_container_errors() {
    let mut deque: IndexedDeque<i32> = IndexedDeque::new();
    assert!(matches!(deque.pop_front(), Err(CoreError::EmptyContainer)));
    assert!(matches!(deque.pop_back(), Err(CoreError::EmptyContainer)));
    assert!(matches!(deque.front(), Err(CoreError::EmptyContainer)));
    assert!(matches!(deque.back(), Err(CoreError::EmptyContainer)));
}

#[test]
fn index_bounds_inclusive_for_insert_exclusive_for_access() {
    let mut deque = IndexedDeque::new();
    deque.push_back(10);
    deque.push_back(20);

    // insert_at accepts index == len
    assert!(deque.insert_at(2, 30).is_ok());
    assert!(matches!(
        deque.insert_at(4, 99),
        Err(CoreError::IndexOutOfRange { index: 4, len: 3 })
    ));

    // at/remove_at reject index == len
    assert!(deque.get(2).is_ok());
    assert!(matches!(
        deque.get(3),
        Err(CoreError::IndexOutOfRange { index: 3, len: 3 })
    ));
    assert!(matches!(
        deque.remove_at(3),
        Err(CoreError::IndexOutOfRange { index: 3, len: 3 })
    ));
}

#[test]
fn get_mut_updates_in_place() {
    let mut deque = IndexedDeque::new();
    for v in 0..4 {
        deque.push_back(v);
    }
    *deque.get_mut(2).expect("valid index") = 99;
    assert_eq!(*deque.get(2).expect("valid index"), 99);
}

#[test]
fn resize_grows_and_shrinks_at_the_chosen_end() {
    let mut deque = IndexedDeque::new();
    deque.push_back(1);
    deque.push_back(2);

    deque.resize(4, &0, ResizeDirection::Forward);
    let values: Vec<i32> = deque.iter().copied().collect();
    assert_eq!(values, [1, 2, 0, 0], "Forward growth pushes at the back");

    deque.resize(6, &9, ResizeDirection::Reverse);
    let values: Vec<i32> = deque.iter().copied().collect();
    assert_eq!(values, [9, 9, 1, 2, 0, 0], "Reverse growth pushes at the front");

    deque.resize(3, &0, ResizeDirection::Forward);
    let values: Vec<i32> = deque.iter().copied().collect();
    assert_eq!(values, [9, 9, 1], "Forward shrink pops from the back");

    deque.resize(1, &0, ResizeDirection::Reverse);
    let values: Vec<i32> = deque.iter().copied().collect();
    assert_eq!(values, [1], "Reverse shrink pops from the front");
}

#[test]
fn clear_empties_and_container_stays_usable() {
    let mut deque = IndexedDeque::new();
    for v in 0..10 {
        deque.push_back(v);
    }
    deque.clear();
    assert!(deque.is_empty());
    assert!(matches!(deque.front(), Err(CoreError::EmptyContainer)));

    deque.push_front(7);
    assert_eq!(*deque.back().expect("one element"), 7);
    assert_eq!(deque.len(), 1);
}

#[test]
fn front_and_back_track_ends() {
    let mut deque = IndexedDeque::new();
    deque.push_back(5);
    assert_eq!(*deque.front().expect("non-empty"), 5);
    assert_eq!(*deque.back().expect("non-empty"), 5);

    deque.push_front(1);
    deque.push_back(9);
    assert_eq!(*deque.front().expect("non-empty"), 1);
    assert_eq!(*deque.back().expect("non-empty"), 9);
}
