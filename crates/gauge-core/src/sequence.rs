//! The three sequence shapes under comparison, behind one trait.
//!
//! Indices stand in for positions so all three shapes share one mutation
//! surface. For the linked shape, index-based mutation re-traverses via
//! `split_off`; cost differences between shapes are the subject under
//! measurement, not something to paper over.

use std::collections::{LinkedList, VecDeque};

use crate::element::Element;

/// Common surface over the three container shapes.
///
/// Implemented for [`Vec`] (contiguous-growable), [`LinkedList`]
/// (doubly-linked-node), and [`VecDeque`] (double-ended-segmented).
pub trait Sequence: Default {
    /// Element type stored in the sequence.
    type Item: Element;

    /// Shape label used as the chart series name.
    const LABEL: &'static str;

    /// Whether capacity reservation is meaningful for this shape.
    const SUPPORTS_RESERVE: bool;

    /// Requests capacity for `additional` further elements; no-op where the
    /// shape has no reservation concept.
    fn reserve_hint(&mut self, additional: usize);

    /// Appends at the tail.
    fn push_back(&mut self, value: Self::Item);

    /// Inserts at the head. The contiguous shape has no native O(1) front
    /// operation and shifts the whole tail on every call.
    fn push_front(&mut self, value: Self::Item);

    /// Inserts `value` before position `index`; `index == len` appends.
    fn insert_at(&mut self, index: usize, value: Self::Item);

    /// Removes the element at `index`.
    fn remove_at(&mut self, index: usize);

    /// Number of live elements.
    fn len(&self) -> usize;

    /// True when no elements are live.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Linear scan from the front; position of the first element matching
    /// `pred`, or `None`.
    fn scan<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&Self::Item) -> bool;

    /// Sorts ascending by identity field, using the algorithm native to the
    /// shape.
    fn sort_by_ident(&mut self);

    /// Identity values in sequence order. Verification helper for fixtures
    /// and tests; never called inside a timed window.
    fn ident_values(&self) -> Vec<u64>;
}

impl<T: Element> Sequence for Vec<T> {
    type Item = T;

    const LABEL: &'static str = "vector";
    const SUPPORTS_RESERVE: bool = true;

    fn reserve_hint(&mut self, additional: usize) {
        self.reserve(additional);
    }

    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn push_front(&mut self, value: T) {
        self.insert(0, value);
    }

    fn insert_at(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }

    fn remove_at(&mut self, index: usize) {
        let _removed = self.remove(index);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn scan<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(pred)
    }

    fn sort_by_ident(&mut self) {
        self.sort_unstable();
    }

    fn ident_values(&self) -> Vec<u64> {
        self.iter().map(Element::ident).collect()
    }
}

impl<T: Element> Sequence for LinkedList<T> {
    type Item = T;

    const LABEL: &'static str = "list";
    const SUPPORTS_RESERVE: bool = false;

    fn reserve_hint(&mut self, _additional: usize) {}

    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }

    fn push_front(&mut self, value: T) {
        LinkedList::push_front(self, value);
    }

    fn insert_at(&mut self, index: usize, value: T) {
        let mut tail = self.split_off(index);
        LinkedList::push_back(self, value);
        self.append(&mut tail);
    }

    fn remove_at(&mut self, index: usize) {
        let mut tail = self.split_off(index);
        let _removed = tail.pop_front();
        self.append(&mut tail);
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn scan<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(pred)
    }

    fn sort_by_ident(&mut self) {
        // Node-local merge sort; a generic swap-based sort over a
        // non-random-access sequence would be quadratic in traversals.
        let sorted = merge_sort(std::mem::take(self));
        *self = sorted;
    }

    fn ident_values(&self) -> Vec<u64> {
        self.iter().map(Element::ident).collect()
    }
}

impl<T: Element> Sequence for VecDeque<T> {
    type Item = T;

    const LABEL: &'static str = "deque";
    const SUPPORTS_RESERVE: bool = true;

    fn reserve_hint(&mut self, additional: usize) {
        self.reserve(additional);
    }

    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    fn push_front(&mut self, value: T) {
        VecDeque::push_front(self, value);
    }

    fn insert_at(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }

    fn remove_at(&mut self, index: usize) {
        let _removed = self.remove(index);
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn scan<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(pred)
    }

    fn sort_by_ident(&mut self) {
        self.make_contiguous().sort_unstable();
    }

    fn ident_values(&self) -> Vec<u64> {
        self.iter().map(Element::ident).collect()
    }
}

/// Stable top-down merge sort over list nodes, splitting at the midpoint.
fn merge_sort<T: Element>(mut list: LinkedList<T>) -> LinkedList<T> {
    if list.len() <= 1 {
        return list;
    }
    let tail = list.split_off(list.len() / 2);
    merge(merge_sort(list), merge_sort(tail))
}

fn merge<T: Element>(mut left: LinkedList<T>, mut right: LinkedList<T>) -> LinkedList<T> {
    let mut merged = LinkedList::new();
    loop {
        let take_left = match (left.front(), right.front()) {
            // `<=` keeps equal-ident runs in their original order.
            (Some(l), Some(r)) => l.ident() <= r.ident(),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let moved = if take_left { left.pop_front() } else { right.pop_front() };
        if let Some(value) = moved {
            merged.push_back(value);
        }
    }
    merged
}

/// Exclusively-owning handle to a heap-allocated container.
///
/// Supports the destruction benchmark: [`HeapSlot::release`] drops the
/// container and every element in it, deterministically, inside the timed
/// window.
#[derive(Debug)]
pub struct HeapSlot<C> {
    inner: Option<Box<C>>,
}

impl<C> HeapSlot<C> {
    /// Moves `container` onto the heap behind an owning handle.
    pub fn new(container: C) -> Self {
        Self { inner: Some(Box::new(container)) }
    }

    /// Drops the owned container and all of its elements.
    pub fn release(&mut self) {
        self.inner = None;
    }

    /// True once [`HeapSlot::release`] has run (or nothing was ever held).
    pub fn is_released(&self) -> bool {
        self.inner.is_none()
    }

    /// Shared access to the held container while it is still live.
    pub fn get(&self) -> Option<&C> {
        self.inner.as_deref()
    }
}

impl<C> Default for HeapSlot<C> {
    fn default() -> Self {
        Self { inner: None }
    }
}
