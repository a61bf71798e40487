//! Optional per-element rendering for tracing heap contents
//!
//! A heap can carry a [`Printer`]. Insert and pop never call it; it exists so a
//! driver can print the storage after each step and watch the heap settle.

use std::fmt;

/// Renders one element into a formatter
pub type Printer<T> = Box<dyn Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result>;

/// Display adapter returned by [`BinaryHeap::dump`](crate::BinaryHeap::dump)
///
/// Formats as `(N  in use):` followed by every element in storage order,
/// each rendered by the heap's printer.
pub struct Dump<'a, T> {
    items: &'a [T],
    printer: &'a Printer<T>,
}

impl<'a, T> Dump<'a, T> {
    pub(crate) fn new(items: &'a [T], printer: &'a Printer<T>) -> Self {
        Self { items, printer }
    }
}

impl<T> fmt::Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:<2} in use):", self.items.len())?;
        for item in self.items {
            (self.printer)(item, f)?;
        }
        Ok(())
    }
}
