//! Operation policies: the timed actions.
//!
//! Each policy performs exactly one logical operation on a live trial
//! subject, entirely within the timed window. Scans compare the raw
//! identity field rather than constructing a probe element, so allocation
//! cost of a temporary never pollutes the measurement. The randomized
//! policies search linearly from the front on purpose: that access pattern
//! is the benchmark subject, not an oversight.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::element::Element;
use crate::sequence::{HeapSlot, Sequence};

/// Number of scan-then-mutate operations performed by [`RandomInsert`] and
/// [`RandomRemove`], independent of the trial size.
pub const MUTATION_OPS: usize = 1000;

/// Seed for the [`RandomSortedInsert`] draw generator; one generator per
/// strategy instance, advancing across the sizes of its series.
const SORTED_INSERT_SEED: u64 = 0xD4A7_5EED;

/// One timed action on a live trial subject.
///
/// Multiple operations compose in declaration order inside a single timed
/// window; the timer brackets the whole sequence.
pub trait Operation<S> {
    /// Applies the operation. `size` is the trial's target size.
    fn apply(&mut self, subject: &mut S, size: usize);
}

/// Baseline; does nothing.
pub struct NoOp;

impl<S> Operation<S> for NoOp {
    fn apply(&mut self, _subject: &mut S, _size: usize) {}
}

/// Requests capacity for `size` elements.
pub struct Reserve;

impl<C: Sequence> Operation<C> for Reserve {
    fn apply(&mut self, subject: &mut C, size: usize) {
        subject.reserve_hint(size);
    }
}

/// Appends `size` default elements at the tail.
pub struct FillBack;

impl<C: Sequence> Operation<C> for FillBack {
    fn apply(&mut self, subject: &mut C, size: usize) {
        for _ in 0..size {
            subject.push_back(C::Item::default());
        }
    }
}

/// Appends `size` default elements at the head. For the contiguous shape
/// this degenerates to repeated whole-tail shifts; that asymmetry is part
/// of what the harness measures.
pub struct FillFront;

impl<C: Sequence> Operation<C> for FillFront {
    fn apply(&mut self, subject: &mut C, size: usize) {
        for _ in 0..size {
            subject.push_front(C::Item::default());
        }
    }
}

/// Performs `size` independent full scans, each searching for a distinct
/// identity value in `0..size`.
pub struct LinearFind;

impl<C: Sequence> Operation<C> for LinearFind {
    fn apply(&mut self, subject: &mut C, size: usize) {
        for target in 0..size as u64 {
            let _found = subject.scan(|v| v.ident() == target);
        }
    }
}

/// Performs [`MUTATION_OPS`] scan-then-insert operations: each finds the
/// first element with identity `i` and inserts a new element with identity
/// `size + i` before it (at the end when absent).
pub struct RandomInsert;

impl<C: Sequence> Operation<C> for RandomInsert {
    fn apply(&mut self, subject: &mut C, size: usize) {
        for i in 0..MUTATION_OPS as u64 {
            let at = subject.scan(|v| v.ident() == i).unwrap_or_else(|| subject.len());
            subject.insert_at(at, C::Item::with_ident(size as u64 + i));
        }
    }
}

/// Performs [`MUTATION_OPS`] scan-then-remove operations: each finds the
/// first element with identity `i` and removes it (no-op when absent).
pub struct RandomRemove;

impl<C: Sequence> Operation<C> for RandomRemove {
    fn apply(&mut self, subject: &mut C, _size: usize) {
        for i in 0..MUTATION_OPS as u64 {
            if let Some(at) = subject.scan(|v| v.ident() == i) {
                subject.remove_at(at);
            }
        }
    }
}

/// Sorts the whole subject ascending by identity field.
pub struct SortElements;

impl<C: Sequence> Operation<C> for SortElements {
    fn apply(&mut self, subject: &mut C, _size: usize) {
        subject.sort_by_ident();
    }
}

/// Releases the heap-owned instance, destroying every contained element
/// inside the timed window.
pub struct Release;

impl<C> Operation<HeapSlot<C>> for Release {
    fn apply(&mut self, subject: &mut HeapSlot<C>, _size: usize) {
        subject.release();
    }
}

/// Performs `size` operations: each draws a uniform identity value and
/// inserts it at the first position whose identity is `>=` the draw,
/// scanning from the front, keeping the sequence sorted ascending.
pub struct RandomSortedInsert {
    rng: StdRng,
}

impl RandomSortedInsert {
    /// Strategy instance with its own seeded draw generator.
    pub fn new() -> Self {
        Self { rng: StdRng::seed_from_u64(SORTED_INSERT_SEED) }
    }
}

impl Default for RandomSortedInsert {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Sequence> Operation<C> for RandomSortedInsert {
    fn apply(&mut self, subject: &mut C, size: usize) {
        for _ in 0..size {
            let drawn = self.rng.gen_range(0..u64::MAX);
            let at = subject.scan(|v| v.ident() >= drawn).unwrap_or_else(|| subject.len());
            subject.insert_at(at, C::Item::with_ident(drawn));
        }
    }
}
