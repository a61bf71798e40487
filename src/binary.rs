//! Array-backed binary min-heap
//!
//! The heap lives in one contiguous, owned `Vec`. Index `0` holds a minimal
//! element under the heap's [`Preorder`]; the parent of index `i` is
//! `(i - 1) / 2` and its children are `2i + 1` and `2i + 2`.
//!
//! Storage grows on demand by roughly 1.5x, so the total cost of all
//! reallocations over `n` inserts stays O(n). Growth is reserved before any
//! element moves, which means a failed insert leaves the heap exactly as it
//! was.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity          |
//! |------------|---------------------|
//! | `insert`   | O(log n), amortized |
//! | `pop`      | O(log n)            |
//! | `peek`     | O(1)                |
//! | `is_empty` | O(1)                |
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heap::{BinaryHeap, Element, KeyOrder};
//!
//! let mut heap = BinaryHeap::with_capacity(4, KeyOrder).unwrap();
//! for key in [7, 3, 5, 1] {
//!     heap.insert(Element::new(key, 42 + key)).unwrap();
//! }
//!
//! let keys: Vec<u32> = heap.drain_sorted().map(|e| e.sort_key).collect();
//! assert_eq!(keys, vec![1, 3, 5, 7]);
//! assert!(heap.is_empty());
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::diagnostics::{Dump, Printer};
use crate::error::HeapError;
use crate::order::{Natural, Preorder};

/// A binary min-heap ordered by a caller-supplied [`Preorder`]
///
/// `capacity` is the number of records the heap has reserved room for; the
/// number of records in use is `len()`, which never exceeds it.
pub struct BinaryHeap<T, O = Natural> {
    data: Vec<T>,
    capacity: usize,
    order: O,
    printer: Option<Printer<T>>,
}

impl<T, O: Preorder<T> + Default> BinaryHeap<T, O> {
    /// Creates an empty heap with no reserved storage
    ///
    /// The first insert triggers growth.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
            order: O::default(),
            printer: None,
        }
    }
}

impl<T, O: Preorder<T> + Default> Default for BinaryHeap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O: Preorder<T>> BinaryHeap<T, O> {
    /// Creates an empty heap with room for `initial_capacity` records
    ///
    /// A capacity of zero is allowed.
    ///
    /// # Errors
    /// Returns [`HeapError::Allocation`] if the storage cannot be reserved.
    pub fn with_capacity(initial_capacity: usize, order: O) -> Result<Self, HeapError> {
        let mut data = Vec::new();
        data.try_reserve_exact(initial_capacity)
            .map_err(HeapError::allocation(initial_capacity))?;
        Ok(Self {
            data,
            capacity: initial_capacity,
            order,
            printer: None,
        })
    }

    /// Creates an empty heap that can render its contents with `printer`
    ///
    /// # Errors
    /// Returns [`HeapError::Allocation`] if the storage cannot be reserved.
    pub fn with_printer(
        initial_capacity: usize,
        order: O,
        printer: Printer<T>,
    ) -> Result<Self, HeapError> {
        let mut heap = Self::with_capacity(initial_capacity, order)?;
        heap.printer = Some(printer);
        Ok(heap)
    }

    /// Installs or removes the diagnostic printer
    pub fn set_printer(&mut self, printer: Option<Printer<T>>) {
        self.printer = printer;
    }

    /// Returns true if the heap holds no records
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of records in use
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of records the heap has room for before growing
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the ordering the heap was built with
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns a minimal record without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the records in storage order (not sorted)
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the records in storage order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Inserts a record, growing storage first if the heap is full
    ///
    /// # Errors
    /// Returns [`HeapError::Allocation`] if storage had to grow and could not.
    /// The heap is left unchanged in that case.
    pub fn insert(&mut self, item: T) -> Result<(), HeapError> {
        if self.data.len() == self.capacity {
            self.grow()?;
        }

        // Room is already reserved, so this push cannot reallocate.
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// Inserts every record from `items`, stopping at the first failure
    ///
    /// Records inserted before the failure stay in the heap.
    ///
    /// # Errors
    /// Returns [`HeapError::Allocation`] if storage could not grow.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, items: I) -> Result<(), HeapError> {
        items.into_iter().try_for_each(|item| self.insert(item))
    }

    /// Removes and returns a minimal record
    ///
    /// The heap does not keep equal records in insertion order.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no records.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let last = self.data.pop().ok_or(HeapError::Empty)?;
        if self.data.is_empty() {
            return Ok(last);
        }

        let head = std::mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Ok(head)
    }

    /// Removes every record, keeping the reserved capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Pops records in order until the heap is empty
    ///
    /// Records the iterator is not driven to are left in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, O> {
        DrainSorted { heap: self }
    }

    /// Consumes the heap, returning its records in order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_sorted().collect()
    }

    /// Checks the heap property at every index
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.order.le(&self.data[(i - 1) / 2], &self.data[i]))
    }

    /// Returns a `Display` view of the storage, if a printer is installed
    pub fn dump(&self) -> Option<Dump<'_, T>> {
        self.printer.as_ref().map(|printer| Dump::new(&self.data, printer))
    }

    /// Capacity after one growth step: about 1.5x, and at least one more slot
    fn grown_capacity(capacity: usize) -> Option<usize> {
        let step = (capacity - capacity / 2).max(1);
        capacity.checked_add(step)
    }

    fn grow(&mut self) -> Result<(), HeapError> {
        let new_capacity = Self::grown_capacity(self.capacity)
            .ok_or(HeapError::Allocation { requested: usize::MAX })?;
        self.data
            .try_reserve_exact(new_capacity - self.data.len())
            .map_err(HeapError::allocation(new_capacity))?;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Move element at index up until its parent is ordered before it
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.order.le(&self.data[parent], &self.data[index]) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down until it is ordered before its lowest child
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let lowest = if right < len && !self.order.le(&self.data[left], &self.data[right]) {
                right
            } else {
                left
            };

            if self.order.le(&self.data[index], &self.data[lowest]) {
                break;
            }
            self.data.swap(index, lowest);
            index = lowest;
        }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .field("printer", &self.printer.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a, T, O> IntoIterator for &'a BinaryHeap<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Iterator returned by [`BinaryHeap::drain_sorted`]
pub struct DrainSorted<'a, T, O: Preorder<T>> {
    heap: &'a mut BinaryHeap<T, O>,
}

impl<T, O: Preorder<T>> Iterator for DrainSorted<'_, T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, O: Preorder<T>> ExactSizeIterator for DrainSorted<'_, T, O> {}

impl<T, O: Preorder<T>> FusedIterator for DrainSorted<'_, T, O> {}
