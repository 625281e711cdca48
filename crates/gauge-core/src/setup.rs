//! Setup policies: build the subject of one timed trial.
//!
//! A setup runs entirely outside the timed window and produces a container
//! (or owning handle) in a defined initial state, in time proportional to
//! the target size.

use crate::element::Element;
use crate::runner::BenchContext;
use crate::sequence::{HeapSlot, Sequence};

/// Produces the subject of one timed trial in a defined initial state.
pub trait Setup<S> {
    /// Builds the trial subject for `size`. Never measured.
    fn build(&self, size: usize, ctx: &mut BenchContext) -> S;

    /// Constructs one element value ahead of the first trial so first-use
    /// initialization cost is never attributed to a measurement.
    fn warm(&self);
}

/// Zero-element instance, no capacity hint.
pub struct Empty;

impl<C: Sequence> Setup<C> for Empty {
    fn build(&self, _size: usize, _ctx: &mut BenchContext) -> C {
        C::default()
    }

    fn warm(&self) {
        let _warm = C::Item::default();
    }
}

/// Zero-element instance with capacity reserved for the full target size.
/// Only meaningful for shapes where [`Sequence::SUPPORTS_RESERVE`] holds.
pub struct WithCapacity;

impl<C: Sequence> Setup<C> for WithCapacity {
    fn build(&self, size: usize, _ctx: &mut BenchContext) -> C {
        let mut seq = C::default();
        seq.reserve_hint(size);
        seq
    }

    fn warm(&self) {
        let _warm = C::Item::default();
    }
}

/// Instance pre-populated with `size` default elements.
pub struct SequentialFill;

impl<C: Sequence> Setup<C> for SequentialFill {
    fn build(&self, size: usize, _ctx: &mut BenchContext) -> C {
        let mut seq = C::default();
        for _ in 0..size {
            seq.push_back(C::Item::default());
        }
        seq
    }

    fn warm(&self) {
        let _warm = C::Item::default();
    }
}

/// Instance pre-populated with the cached uniform permutation of identity
/// values `0..size` (see [`crate::PermutationCache`]).
pub struct RandomFill;

impl<C: Sequence> Setup<C> for RandomFill {
    fn build(&self, size: usize, ctx: &mut BenchContext) -> C {
        let mut seq = C::default();
        for &ident in ctx.permutation(size) {
            seq.push_back(C::Item::with_ident(ident));
        }
        seq
    }

    fn warm(&self) {
        let _warm = C::Item::default();
    }
}

/// Heap-allocates a sequentially filled instance behind an owning
/// [`HeapSlot`], for the bulk-destruction benchmark.
pub struct HeapFill;

impl<C: Sequence> Setup<HeapSlot<C>> for HeapFill {
    fn build(&self, size: usize, _ctx: &mut BenchContext) -> HeapSlot<C> {
        let mut seq = C::default();
        for _ in 0..size {
            seq.push_back(C::Item::default());
        }
        HeapSlot::new(seq)
    }

    fn warm(&self) {
        let _warm = C::Item::default();
    }
}
