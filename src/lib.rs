//! Array-Backed Binary Min-Heap
//!
//! This crate provides a binary min-heap stored in a single contiguous,
//! growable array, intended as the open list of best-first searches such as
//! A*. Once filled, the heap is drained in order; the rest of the array can
//! stay a jumble as long as every pop yields a minimal element.
//!
//! # Features
//!
//! - **Caller-defined ordering**: any [`Preorder`], including plain closures
//! - **Amortized growth**: storage grows by about 1.5x when full
//! - **Strong guarantee on growth failure**: a failed insert changes nothing
//! - **Recoverable errors**: popping an empty heap returns [`HeapError::Empty`]
//! - **Diagnostics**: an optional per-element printer renders the storage
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heap::{BinaryHeap, Element, HeapError, KeyOrder};
//!
//! let mut heap = BinaryHeap::with_capacity(10, KeyOrder)?;
//! heap.insert(Element::new(42, 84))?;
//! heap.insert(Element::new(7, 49))?;
//!
//! assert_eq!(heap.pop()?.sort_key, 7);
//! assert_eq!(heap.pop()?.user_data, 84);
//! assert_eq!(heap.pop(), Err(HeapError::Empty));
//! # Ok::<(), HeapError>(())
//! ```

pub mod binary;
pub mod diagnostics;
pub mod element;
pub mod error;
pub mod order;

pub use binary::{BinaryHeap, DrainSorted};
pub use diagnostics::{Dump, Printer};
pub use element::{Element, KeyOrder};
pub use error::HeapError;
pub use order::{Natural, Preorder, Reversed};
