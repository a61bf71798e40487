//! The fixed-size record stored by best-first searches
//!
//! [`Element`] carries a sort key plus two opaque payload fields. The heap
//! moves records in and out by value, so a popped element is an independent
//! copy with exactly the payload it was inserted with.

use std::fmt;

use crate::order::Preorder;

/// A heap record: an unsigned sort key and an opaque payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Element {
    /// The key the heap is ordered on when used with [`KeyOrder`]
    pub sort_key: u32,
    /// Opaque payload value
    pub user_data: u32,
    /// Opaque auxiliary byte
    pub user_junk: u8,
}

impl Element {
    /// Creates a record with a zero auxiliary byte
    pub fn new(sort_key: u32, user_data: u32) -> Self {
        Self {
            sort_key,
            user_data,
            user_junk: 0,
        }
    }

    /// Sets the auxiliary byte
    pub fn with_junk(mut self, user_junk: u8) -> Self {
        self.user_junk = user_junk;
        self
    }

    /// Renders the sort key in a two-column field followed by a space
    ///
    /// Matches the signature of [`Printer`](crate::diagnostics::Printer), so it
    /// can be installed with `Box::new(Element::print_key)`.
    pub fn print_key(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<2} ", self.sort_key)
    }
}

/// Orders [`Element`]s by ascending `sort_key`, ignoring the payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyOrder;

impl Preorder<Element> for KeyOrder {
    #[inline]
    fn le(&self, a: &Element, b: &Element) -> bool {
        a.sort_key <= b.sort_key
    }
}
