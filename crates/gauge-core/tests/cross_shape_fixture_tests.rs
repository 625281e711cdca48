// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]

use std::collections::{LinkedList, VecDeque};

use gauge_core::{BenchContext, Element, Pod32, RandomFill, Sequence, Setup};

fn build<C: Sequence>(size: usize, ctx: &mut BenchContext) -> C {
    RandomFill.build(size, ctx)
}

fn assert_is_permutation(values: &[u64], size: usize) {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let expected: Vec<u64> = (0..size as u64).collect();
    assert_eq!(sorted, expected, "each identity must appear exactly once");
}

#[test]
fn random_fill_is_identical_across_shapes() {
    let mut ctx = BenchContext::default();
    let size = 512;

    let vector: Vec<Pod32> = build(size, &mut ctx);
    let list: LinkedList<Pod32> = build(size, &mut ctx);
    let deque: VecDeque<Pod32> = build(size, &mut ctx);

    let from_vector = vector.ident_values();
    assert_is_permutation(&from_vector, size);
    assert_eq!(from_vector, list.ident_values());
    assert_eq!(from_vector, deque.ident_values());
}

#[test]
fn permutation_survives_interleaved_sizes() {
    let mut ctx = BenchContext::default();

    let first: Vec<Pod32> = build(100, &mut ctx);
    let other: Vec<Pod32> = build(250, &mut ctx);
    assert_is_permutation(&other.ident_values(), 250);

    // regenerating for the original size reproduces the same fixture
    let second: Vec<Pod32> = build(100, &mut ctx);
    assert_eq!(first.ident_values(), second.ident_values());
}

#[test]
fn random_fill_elements_carry_distinct_idents() {
    let mut ctx = BenchContext::default();
    let seq: Vec<Pod32> = build(64, &mut ctx);
    let mut idents = seq.ident_values();
    idents.sort_unstable();
    idents.dedup();
    assert_eq!(idents.len(), 64);
    assert_eq!(seq.first().map(Element::ident), seq.ident_values().first().copied());
}
