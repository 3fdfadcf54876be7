//! Test utilities for dynarray development.
//!
//! Provides a `Vec`-backed [`ReferenceModel`] that follows the same
//! contract as [`DynamicArray`], an [`Op`] vocabulary for driving both, and
//! generators for operation sequences (a `proptest` strategy and a seeded
//! deterministic script) in [`ops`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod ops;

use dynarray::{DynamicArray, IndexError};

pub use ops::{op_script, op_strategy};

/// A single container operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op<T> {
    Push(T),
    Insert(usize, T),
    Pop,
    Remove(usize),
    RemoveItem(T),
    /// Replace the container with a clone of itself.
    Clone,
}

/// What an [`Op`] produced, comparable across implementations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The element now stored by `Push`/`Insert`.
    Stored(T),
    /// The element returned by `Pop`/`Remove`/`RemoveItem`, if any.
    Removed(Option<T>),
    /// An index violation.
    Rejected(IndexError),
    Cloned,
}

/// Oracle with the container's contract, built on `Vec`.
///
/// Tracks length only; capacity is a property of the real container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceModel<T> {
    items: Vec<T>,
}

impl<T: Clone + PartialEq> ReferenceModel<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_elements(elements: &[T]) -> Self {
        Self {
            items: elements.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn apply(&mut self, op: &Op<T>) -> Outcome<T> {
        let len = self.items.len();
        match op {
            Op::Push(value) => {
                self.items.push(value.clone());
                Outcome::Stored(value.clone())
            }
            Op::Insert(index, value) => {
                if *index > len {
                    return Outcome::Rejected(IndexError::InsertOutOfBounds {
                        index: *index,
                        len,
                    });
                }
                self.items.insert(*index, value.clone());
                Outcome::Stored(value.clone())
            }
            Op::Pop => Outcome::Removed(self.items.pop()),
            Op::Remove(index) => {
                if *index >= len {
                    return Outcome::Rejected(IndexError::OutOfBounds {
                        index: *index,
                        len,
                    });
                }
                Outcome::Removed(Some(self.items.remove(*index)))
            }
            Op::RemoveItem(value) => {
                let pos = self.items.iter().position(|item| item == value);
                Outcome::Removed(pos.map(|pos| self.items.remove(pos)))
            }
            Op::Clone => {
                self.items = self.items.clone();
                Outcome::Cloned
            }
        }
    }
}

/// Apply `op` to a real [`DynamicArray`].
pub fn apply<T: Clone + PartialEq>(array: &mut DynamicArray<T>, op: &Op<T>) -> Outcome<T> {
    match op {
        Op::Push(value) => Outcome::Stored(array.push(value.clone()).clone()),
        Op::Insert(index, value) => match array.insert(*index, value.clone()) {
            Ok(stored) => Outcome::Stored(stored.clone()),
            Err(err) => Outcome::Rejected(err),
        },
        Op::Pop => Outcome::Removed(array.pop()),
        Op::Remove(index) => match array.remove(*index) {
            Ok(removed) => Outcome::Removed(Some(removed)),
            Err(err) => Outcome::Rejected(err),
        },
        Op::RemoveItem(value) => Outcome::Removed(array.remove_item(value)),
        Op::Clone => {
            *array = array.clone();
            Outcome::Cloned
        }
    }
}

/// The first step at which the container and the model disagreed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Divergence<T> {
    pub step: usize,
    pub op: Op<T>,
    pub expected: Outcome<T>,
    pub actual: Outcome<T>,
    pub expected_items: Vec<T>,
    pub actual_items: Vec<T>,
}

/// Run `ops` against a fresh container and a fresh model, comparing every
/// outcome, the resulting contents, and `len <= capacity` after each step.
pub fn replay<T: Clone + PartialEq>(
    initial: DynamicArray<T>,
    ops: &[Op<T>],
) -> Result<DynamicArray<T>, Divergence<T>> {
    let mut array = initial;
    let mut model = ReferenceModel::from_elements(&array.to_vec());
    for (step, op) in ops.iter().enumerate() {
        let expected = model.apply(op);
        let actual = apply(&mut array, op);
        let actual_items = array.to_vec();
        if expected != actual
            || actual_items.as_slice() != model.as_slice()
            || array.len() > array.capacity()
        {
            return Err(Divergence {
                step,
                op: op.clone(),
                expected,
                actual,
                expected_items: model.as_slice().to_vec(),
                actual_items,
            });
        }
    }
    Ok(array)
}
