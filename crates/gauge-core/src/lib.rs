// SPDX-License-Identifier: Apache-2.0
//! gauge-core: sequence-container micro-benchmark engine.
//!
//! Composes (container shape x element type x setup policy x operation
//! policies) into timed trials and streams one averaged sample per workload
//! size to a [`ResultSink`]. The three shapes under comparison are the
//! contiguous-growable [`Vec`], the doubly-linked
//! [`LinkedList`](std::collections::LinkedList), and the segmented
//! [`VecDeque`](std::collections::VecDeque), unified behind the [`Sequence`]
//! trait.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

/// Small numeric helpers (compile-time unrolled pow).
pub mod math;

mod element;
mod ops;
mod permutation;
mod runner;
mod sequence;
mod setup;

// Re-exports for stable public API
pub use element::{Element, Heavy, Pod1024, Pod128, Pod32, Pod4096, Pod8};
pub use ops::{
    FillBack, FillFront, LinearFind, NoOp, Operation, RandomInsert, RandomRemove,
    RandomSortedInsert, Release, Reserve, SortElements, MUTATION_OPS,
};
pub use permutation::PermutationCache;
pub use runner::{mean_elapsed, BenchCase, BenchContext, ResultSink, TimeUnit, REPEAT};
pub use sequence::{HeapSlot, Sequence};
pub use setup::{Empty, HeapFill, RandomFill, SequentialFill, Setup, WithCapacity};
