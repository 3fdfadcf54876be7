//! Growable array-backed sequential container.
//!
//! [`DynamicArray`] keeps its elements in one owned, contiguous buffer of
//! slots and a logical length. Inserting into a full buffer reallocates it
//! at double the capacity; removing never shrinks it.
//!
//! # Layout
//!
//! ```text
//! DynamicArray<T>
//! ├── slots: Box<[Option<T>]>   capacity = slots.len()
//! │   ├── [0, len)              occupied, insertion order
//! │   └── [len, capacity)       None
//! ├── len
//! └── growth_floor              minimum capacity after growth (>= 1)
//! ```
//!
//! # Errors vs. absence
//!
//! - Index misuse (`get`, `insert`, `remove` out of range, `last` on an
//!   empty array) returns [`IndexError`].
//! - Removals that find nothing (`pop` on empty, `remove_item` without a
//!   match) return `None`.
//!
//! # Concurrency
//!
//! Mutation takes `&mut self` and there is no interior locking. Share an
//! array across threads by wrapping it in a `Mutex`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod hash;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use config::ArrayConfig;
pub use error::IndexError;
