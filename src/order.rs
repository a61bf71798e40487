//! Ordering capabilities for heaps
//!
//! A heap never looks inside its elements. Everything it knows about them is
//! what a [`Preorder`] tells it: whether one element may sit above another.
//!
//! Any `Fn(&T, &T) -> bool` is a `Preorder<T>`, so closures and plain
//! functions can be handed to a heap directly:
//!
//! ```rust
//! use rust_binary_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::with_capacity(4, |a: &u32, b: &u32| a % 10 <= b % 10).unwrap();
//! heap.insert(19u32).unwrap();
//! heap.insert(21).unwrap();
//! assert_eq!(heap.pop(), Ok(21));
//! ```

/// A total preorder used to arrange heap elements
///
/// `le(a, b)` returns true when `a` must not be ordered after `b`. The answer
/// for a given pair has to stay the same for the lifetime of the heap, or the
/// heap property cannot be maintained.
pub trait Preorder<T: ?Sized> {
    /// Returns true if `a` is less than or equal to `b`
    fn le(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Preorder<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn le(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders elements by their `Ord` implementation, smallest first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Preorder<T> for Natural {
    #[inline]
    fn le(&self, a: &T, b: &T) -> bool {
        a <= b
    }
}

/// Flips another preorder, turning a min-heap into a max-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<O>(pub O);

impl<T: ?Sized, O: Preorder<T>> Preorder<T> for Reversed<O> {
    #[inline]
    fn le(&self, a: &T, b: &T) -> bool {
        self.0.le(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_is_le() {
        assert!(Natural.le(&1, &2));
        assert!(Natural.le(&2, &2));
        assert!(!Natural.le(&3, &2));
    }

    #[test]
    fn test_reversed_flips_arguments() {
        let rev = Reversed(Natural);
        assert!(rev.le(&3, &2));
        assert!(rev.le(&2, &2));
        assert!(!rev.le(&1, &2));
    }

    #[test]
    fn test_closure_is_preorder() {
        let by_len = |a: &&str, b: &&str| a.len() <= b.len();
        assert!(by_len.le(&"ab", &"abc"));
        assert!(!by_len.le(&"abcd", &"abc"));
    }
}
