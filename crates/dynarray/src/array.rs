//! The growable slot buffer behind [`DynamicArray`].
//!
//! A [`DynamicArray`] owns one boxed slice of `Option<T>` slots. Slots
//! `[0, len)` are occupied in insertion order; slots `[len, capacity)` are
//! `None`. When an insert finds the buffer full, a fresh buffer of double
//! the capacity is allocated, the live elements are moved over, and the old
//! buffer is dropped. The buffer is never resized in place and never shrinks.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::{grown_capacity, ArrayConfig};
use crate::error::IndexError;
use crate::hash;

/// A growable, array-backed sequential container.
///
/// Index violations return [`IndexError`]; removals that find nothing
/// return `None`. Every operation either completes with `len <= capacity`
/// intact or fails before touching the buffer.
///
/// ```
/// use dynarray::{dynarray, DynamicArray};
///
/// let mut values = dynarray![10, 20, 30, 40];
/// assert_eq!(values.remove(2), Ok(30));
/// assert_eq!(values.to_string(), "[10, 20, 40]");
///
/// let empty: DynamicArray<i32> = DynamicArray::new();
/// assert!(empty.last().is_err());
/// ```
pub struct DynamicArray<T> {
    /// Backing storage. `slots.len()` is the capacity.
    slots: Box<[Option<T>]>,
    /// Number of occupied slots, always a prefix of `slots`.
    len: usize,
    /// Minimum capacity after a growth step (at least 1).
    growth_floor: usize,
}

/// Allocate `capacity` empty slots.
fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default capacity of
    /// [`ArrayConfig::DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_config(&ArrayConfig::new())
    }

    /// Create an empty array with exactly `capacity` slots.
    ///
    /// A capacity of 0 is valid: the first insert grows the buffer to the
    /// default growth floor of one slot.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(&ArrayConfig::new().with_initial_capacity(capacity))
    }

    /// Create an empty array from an explicit [`ArrayConfig`].
    pub fn with_config(config: &ArrayConfig) -> Self {
        Self {
            slots: empty_slots(config.initial_capacity),
            len: 0,
            growth_floor: config.growth_floor(),
        }
    }

    /// Create an array holding `elements` in order.
    ///
    /// Capacity is twice the element count, so an empty input yields a
    /// zero-capacity array.
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = elements.into_iter().collect();
        let len = elements.len();
        let mut slots = empty_slots(len.saturating_mul(2));
        for (slot, element) in slots.iter_mut().zip(elements) {
            *slot = Some(element);
        }
        Self {
            slots,
            len,
            growth_floor: ArrayConfig::DEFAULT_GROWTH_FLOOR,
        }
    }

    /// Number of elements in the array.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The last element.
    ///
    /// Returns [`IndexError::Empty`] if the array is empty.
    pub fn last(&self) -> Result<&T, IndexError> {
        match self.len.checked_sub(1) {
            Some(index) => Ok(self.live(index)),
            None => Err(IndexError::Empty),
        }
    }

    /// The element at `index`.
    ///
    /// Returns [`IndexError::OutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        self.check_index(index)?;
        Ok(self.live(index))
    }

    /// Append `element`, growing the buffer if it is full.
    ///
    /// Returns a reference to the stored element.
    pub fn push(&mut self, element: T) -> &T {
        if self.len == self.capacity() {
            self.grow();
        }
        let index = self.len;
        self.len += 1;
        self.slots[index].insert(element)
    }

    /// Insert `element` at `index`, shifting later elements one slot right.
    ///
    /// `index == len` appends. Returns [`IndexError::InsertOutOfBounds`]
    /// if `index > len`; the array is left untouched in that case.
    pub fn insert(&mut self, index: usize, element: T) -> Result<&T, IndexError> {
        if index > self.len {
            return Err(IndexError::InsertOutOfBounds {
                index,
                len: self.len,
            });
        }
        if self.len == self.capacity() {
            self.grow();
        }
        // Slot `len` is empty; rotating it to the front of the window opens
        // the gap at `index` and moves `[index, len)` up by one.
        self.slots[index..=self.len].rotate_right(1);
        self.len += 1;
        Ok(&*self.slots[index].insert(element))
    }

    /// Remove and return the last element, or `None` if the array is empty.
    pub fn pop(&mut self) -> Option<T> {
        let index = self.len.checked_sub(1)?;
        self.len = index;
        self.slots[index].take()
    }

    /// Remove and return the element at `index`, shifting later elements
    /// one slot left.
    ///
    /// Returns [`IndexError::OutOfBounds`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, IndexError> {
        self.check_index(index)?;
        Ok(self.take_at(index))
    }

    /// Position of the first element equal to `element`, scanning from 0.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.live_slots().position(|candidate| candidate == element)
    }

    /// Whether any element equals `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Remove and return the first element equal to `element`.
    ///
    /// Returns `None` and leaves the array unchanged if nothing matches.
    /// A match in the last position is removed like any other.
    pub fn remove_item(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.index_of(element)?;
        Some(self.take_at(index))
    }

    /// Order-sensitive hash of the live elements.
    ///
    /// Starts at [`hash::HASH_SEED`] and folds each element's FNV-1a hash
    /// in as `acc * 31 + h`. Equal arrays hash equal regardless of
    /// capacity. Stable across processes.
    pub fn hash_code(&self) -> u64
    where
        T: Hash,
    {
        self.live_slots().fold(hash::HASH_SEED, |acc, element| {
            hash::combine(acc, hash::element_hash(element))
        })
    }

    /// Clone the live elements into a `Vec`, in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.live_slots().cloned().collect()
    }

    fn check_index(&self, index: usize) -> Result<(), IndexError> {
        if index >= self.len {
            return Err(IndexError::OutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    fn live(&self, index: usize) -> &T {
        self.slots[index]
            .as_ref()
            .expect("slots below len are always occupied")
    }

    fn live_slots(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.len].iter().flatten()
    }

    /// Take the element at `index < len` and close the gap.
    fn take_at(&mut self, index: usize) -> T {
        let element = self.slots[index]
            .take()
            .expect("slots below len are always occupied");
        // The emptied slot travels to `len - 1`, which becomes the first
        // unused slot once `len` drops.
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        element
    }

    /// Replace the buffer with one of double capacity (at least
    /// `growth_floor`), moving the live elements across.
    fn grow(&mut self) {
        let new_capacity = grown_capacity(self.capacity(), self.growth_floor);
        let mut slots = empty_slots(new_capacity);
        for (dst, src) in slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *dst = src.take();
        }
        self.slots = slots;
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shallow duplication: a fresh buffer of the same capacity with each live
/// element cloned once. For handle types such as `Rc<RefCell<_>>` the copy
/// shares the pointees with the original.
impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut slots = empty_slots(self.capacity());
        for (dst, src) in slots.iter_mut().zip(self.live_slots()) {
            *dst = Some(src.clone());
        }
        Self {
            slots,
            len: self.len,
            growth_floor: self.growth_floor,
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.live_slots().eq(other.live_slots())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.live_slots().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.live_slots()).finish()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_elements(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_elements(elements)
    }
}

/// Build a [`DynamicArray`] from a list of elements.
///
/// Capacity is twice the number of elements; `dynarray![]` has capacity 0.
///
/// ```
/// let values = dynarray::dynarray![10, 20];
/// assert_eq!(values.len(), 2);
/// assert_eq!(values.capacity(), 4);
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynamicArray::from_elements([])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::DynamicArray::from_elements([$($element),+])
    };
}
