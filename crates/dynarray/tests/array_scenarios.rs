//! End-to-end scenarios over the public `DynamicArray` API.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dynarray::{dynarray, ArrayConfig, DynamicArray, IndexError};
use indexmap::IndexMap;

#[test]
fn remove_middle_of_four() {
    let mut array = dynarray![10, 20, 30, 40];
    assert_eq!(array.remove(2), Ok(30));
    assert_eq!(array.len(), 3);
    assert_eq!(array.to_vec(), vec![10, 20, 40]);
}

#[test]
fn last_on_empty_is_index_error() {
    let array: DynamicArray<i32> = DynamicArray::new();
    let err = array.last().unwrap_err();
    assert_eq!(err, IndexError::Empty);
    assert_eq!(err.index(), 0);
}

#[test]
fn six_pushes_into_capacity_five() {
    let mut array = DynamicArray::with_capacity(5);
    for _ in 0..6 {
        array.push(99);
    }
    assert_eq!(array.len(), 6);
    assert!(array.capacity() >= 6);
    assert_eq!(array.capacity(), 10);
}

#[test]
fn insert_at_front_shifts_existing() {
    let mut array = dynarray![10, 20];
    array.insert(0, 99).unwrap();
    assert_eq!(array.get(0), Ok(&99));
    assert_eq!(array.get(1), Ok(&10));
    assert_eq!(array.get(2), Ok(&20));
}

#[test]
fn remove_missing_item_is_absent() {
    let mut array = dynarray![10, 20, 30, 40];
    assert_eq!(array.remove_item(&99), None);
    assert_eq!(array.len(), 4);
}

#[test]
fn renders_as_bracketed_list() {
    assert_eq!(dynarray![10, 20].to_string(), "[10, 20]");
    assert_eq!(DynamicArray::<i32>::new().to_string(), "[]");
}

#[test]
fn seeded_array_mixed_sequence() {
    let mut array = dynarray![10, 20];

    array.push(30);
    array.insert(0, 40).unwrap();
    array.push(50);
    array.remove(3).unwrap();
    array.insert(2, 60).unwrap();
    array.insert(1, 70).unwrap();
    array.pop();

    let copy = array.clone();
    assert_eq!(copy.len(), 5);
    assert_eq!(copy.to_vec(), vec![40, 70, 10, 60, 20]);
    assert_eq!(copy.last(), Ok(&20));
    assert_eq!(
        copy.get(5),
        Err(IndexError::OutOfBounds { index: 5, len: 5 })
    );
}

#[test]
fn small_capacity_mixed_sequence() {
    let mut array = DynamicArray::with_capacity(2);

    array.push(30);
    array.insert(0, 40).unwrap();
    array.push(50);
    array.remove(1).unwrap();
    array.insert(1, 60).unwrap();
    array.insert(1, 70).unwrap();
    array.pop();

    assert_eq!(array.len(), 3);
    assert_eq!(array.to_vec(), vec![40, 70, 60]);
    assert_eq!(array.last(), Ok(&60));
    assert!(array.get(3).is_err());
}

#[test]
fn zero_capacity_accepts_every_insert_path() {
    let mut pushed = DynamicArray::with_capacity(0);
    pushed.push("a");
    assert_eq!(pushed.capacity(), 1);

    let mut inserted = DynamicArray::with_capacity(0);
    inserted.insert(0, "a").unwrap();
    assert_eq!(inserted.capacity(), 1);

    let mut literal: DynamicArray<&str> = dynarray![];
    literal.push("a");
    literal.push("b");
    assert_eq!(literal.capacity(), 2);
    assert_eq!(pushed, inserted);
}

#[test]
fn configured_floor_controls_first_growth() {
    let config = ArrayConfig::new()
        .with_initial_capacity(0)
        .with_growth_floor(16);
    let mut array = DynamicArray::with_config(&config);
    for i in 0..17 {
        array.push(i);
    }
    assert_eq!(array.capacity(), 32);
}

#[test]
fn equal_content_keys_collapse() {
    let mut map = IndexMap::new();
    map.insert(dynarray![10, 20], "array list entry value 1");
    map.insert(dynarray![10, 20], "array list entry value 2");
    assert_eq!(map.len(), 1);

    let mut grown = DynamicArray::with_capacity(1);
    grown.push(10);
    grown.push(20);
    assert_eq!(map.get(&grown), Some(&"array list entry value 2"));

    let mut std_map = HashMap::new();
    std_map.insert(dynarray![10, 20], 1);
    std_map.insert(grown, 2);
    assert_eq!(std_map.len(), 1);
}

#[test]
fn reversed_content_hashes_differently() {
    let a = dynarray![10, 20];
    let b = dynarray![20, 10];
    assert_ne!(a, b);
    assert_ne!(a.hash_code(), b.hash_code());
}

#[test]
fn nested_arrays_clone_shallowly() {
    let inner = Rc::new(RefCell::new(dynarray![10, 20]));
    let outer = dynarray![Rc::clone(&inner)];
    let mut copy = outer.clone();

    assert_eq!(copy.len(), 1);
    assert_eq!(*copy.get(0).unwrap().borrow(), dynarray![10, 20]);

    // Shared pointee: a change through the copy is visible through the original.
    inner.borrow_mut().remove_item(&10);
    assert_eq!(*outer.get(0).unwrap().borrow(), dynarray![20]);
    assert_eq!(*copy.get(0).unwrap().borrow(), dynarray![20]);

    // Separate top level: growing the copy leaves the original alone.
    copy.push(Rc::new(RefCell::new(DynamicArray::new())));
    copy.push(Rc::new(RefCell::new(DynamicArray::new())));
    assert_eq!(outer.len(), 1);
    assert_eq!(outer.capacity(), 2);
    assert_eq!(copy.len(), 3);
    assert_eq!(copy.capacity(), 4);
}

#[test]
fn clone_of_value_elements_is_independent() {
    let original = dynarray![String::from("heat"), String::from("reward")];
    let mut copy = original.clone();
    copy.remove(0).unwrap();
    assert_eq!(original.len(), 2);
    assert_eq!(copy.to_vec(), vec![String::from("reward")]);
}

#[test]
fn errors_do_not_mutate() {
    let mut array = dynarray![1, 2, 3];
    let before = array.clone();
    assert!(array.get(3).is_err());
    assert!(array.remove(3).is_err());
    assert!(array.insert(4, 9).is_err());
    assert_eq!(array, before);
    assert_eq!(array.capacity(), before.capacity());
}
