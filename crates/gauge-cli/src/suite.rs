// SPDX-License-Identifier: Apache-2.0
//! The fixed benchmark matrix.
//!
//! One block per graph: start the graph on the sink, then run one
//! [`BenchCase`] per container shape over the graph's size ladder. The
//! quadratic graphs (front fill, sorted insert) run for the 8-byte element
//! only; their shape is already clear at the smallest payload.

use std::collections::{LinkedList, VecDeque};
use std::mem::size_of;

use gauge_core::{
    BenchCase, BenchContext, Element, Empty, FillBack, FillFront, HeapFill, HeapSlot, Heavy,
    LinearFind, Pod1024, Pod128, Pod32, Pod4096, Pod8, RandomFill, RandomInsert, RandomRemove,
    RandomSortedInsert, Release, Reserve, ResultSink, SortElements, TimeUnit,
};

/// Size ladder for fill_back, sort, and destruction.
const FILL_SIZES: [usize; 10] = [
    100_000, 200_000, 300_000, 400_000, 500_000, 600_000, 700_000, 800_000, 900_000, 1_000_000,
];

/// Size ladder for fill_front, random_insert, random_remove, and
/// number_crunching.
const MUTATE_SIZES: [usize; 10] = [
    10_000, 20_000, 30_000, 40_000, 50_000, 60_000, 70_000, 80_000, 90_000, 100_000,
];

/// Size ladder for linear_search.
const SEARCH_SIZES: [usize; 10] =
    [1_000, 2_000, 3_000, 4_000, 5_000, 6_000, 7_000, 8_000, 9_000, 10_000];

/// Runs one case per container shape with identical setup and operations.
/// The setup and operation expressions re-evaluate per shape, so stateful
/// operations get one instance per series.
macro_rules! each_shape {
    ($elem:ty, $ctx:expr, $sink:expr, $sizes:expr, $unit:expr, $setup:expr, [$($op:expr),+ $(,)?]) => {
        BenchCase::<Vec<$elem>>::new("vector", $sizes, $unit, Box::new($setup), vec![$(Box::new($op)),+])
            .run($ctx, $sink);
        BenchCase::<LinkedList<$elem>>::new("list", $sizes, $unit, Box::new($setup), vec![$(Box::new($op)),+])
            .run($ctx, $sink);
        BenchCase::<VecDeque<$elem>>::new("deque", $sizes, $unit, Box::new($setup), vec![$(Box::new($op)),+])
            .run($ctx, $sink);
    };
}

/// Runs the whole matrix, one element variant after another.
pub fn run(ctx: &mut BenchContext, sink: &mut dyn ResultSink) {
    element_suite::<Pod8>("8", ctx, sink);
    element_suite::<Pod32>("32", ctx, sink);
    element_suite::<Pod128>("128", ctx, sink);
    element_suite::<Pod1024>("1024", ctx, sink);
    element_suite::<Pod4096>("4096", ctx, sink);
    element_suite::<Heavy>("heavy", ctx, sink);
}

fn element_suite<T: Element + 'static>(
    tag: &str,
    ctx: &mut BenchContext,
    sink: &mut dyn ResultSink,
) {
    let small_payload = size_of::<T>() == size_of::<Pod8>();

    sink.start_graph(
        &format!("fill_back_{tag}"),
        &graph_title("fill_back", tag),
        TimeUnit::Micros,
    );
    BenchCase::<Vec<T>>::new(
        "vector_pre",
        &FILL_SIZES,
        TimeUnit::Micros,
        Box::new(Empty),
        vec![Box::new(Reserve), Box::new(FillBack)],
    )
    .run(ctx, sink);
    each_shape!(T, ctx, sink, &FILL_SIZES, TimeUnit::Micros, Empty, [FillBack]);

    if small_payload {
        sink.start_graph(
            &format!("fill_front_{tag}"),
            &graph_title("fill_front", tag),
            TimeUnit::Millis,
        );
        each_shape!(T, ctx, sink, &MUTATE_SIZES, TimeUnit::Millis, Empty, [FillFront]);
    }

    sink.start_graph(
        &format!("linear_search_{tag}"),
        &graph_title("linear_search", tag),
        TimeUnit::Micros,
    );
    each_shape!(T, ctx, sink, &SEARCH_SIZES, TimeUnit::Micros, RandomFill, [LinearFind]);

    sink.start_graph(
        &format!("random_insert_{tag}"),
        &graph_title("random_insert", tag),
        TimeUnit::Millis,
    );
    each_shape!(T, ctx, sink, &MUTATE_SIZES, TimeUnit::Millis, RandomFill, [RandomInsert]);

    sink.start_graph(
        &format!("random_remove_{tag}"),
        &graph_title("random_remove", tag),
        TimeUnit::Millis,
    );
    each_shape!(T, ctx, sink, &MUTATE_SIZES, TimeUnit::Millis, RandomFill, [RandomRemove]);

    sink.start_graph(&format!("sort_{tag}"), &graph_title("sort", tag), TimeUnit::Millis);
    each_shape!(T, ctx, sink, &FILL_SIZES, TimeUnit::Millis, RandomFill, [SortElements]);

    sink.start_graph(
        &format!("destruction_{tag}"),
        &graph_title("destruction", tag),
        TimeUnit::Micros,
    );
    BenchCase::<HeapSlot<Vec<T>>>::new(
        "vector",
        &FILL_SIZES,
        TimeUnit::Micros,
        Box::new(HeapFill),
        vec![Box::new(Release)],
    )
    .run(ctx, sink);
    BenchCase::<HeapSlot<LinkedList<T>>>::new(
        "list",
        &FILL_SIZES,
        TimeUnit::Micros,
        Box::new(HeapFill),
        vec![Box::new(Release)],
    )
    .run(ctx, sink);
    BenchCase::<HeapSlot<VecDeque<T>>>::new(
        "deque",
        &FILL_SIZES,
        TimeUnit::Micros,
        Box::new(HeapFill),
        vec![Box::new(Release)],
    )
    .run(ctx, sink);

    if small_payload {
        sink.start_graph("number_crunching", "number_crunching", TimeUnit::Millis);
        each_shape!(
            T,
            ctx,
            sink,
            &MUTATE_SIZES,
            TimeUnit::Millis,
            Empty,
            [RandomSortedInsert::new()]
        );
    }
}

/// Chart title for a named graph and element tag. Numeric tags carry the
/// payload size in bytes; the heavy variant keeps its plain tag.
fn graph_title(name: &str, tag: &str) -> String {
    if tag.bytes().all(|b| b.is_ascii_digit()) {
        format!("{name} - {tag} byte")
    } else {
        format!("{name} - {tag}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_tags_title_as_byte_counts() {
        assert_eq!(graph_title("fill_back", "8"), "fill_back - 8 byte");
        assert_eq!(graph_title("sort", "4096"), "sort - 4096 byte");
    }

    #[test]
    fn heavy_tag_titles_without_a_byte_count() {
        assert_eq!(graph_title("destruction", "heavy"), "destruction - heavy");
    }

    #[test]
    fn size_ladders_ascend_in_even_steps() {
        for ladder in [&FILL_SIZES, &MUTATE_SIZES, &SEARCH_SIZES] {
            let step = ladder[0];
            for (i, &size) in ladder.iter().enumerate() {
                assert_eq!(size, step * (i + 1));
            }
        }
    }
}
