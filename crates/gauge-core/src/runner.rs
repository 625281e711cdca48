//! The benchmark driver: timed trials, averaging, and sample emission.
//!
//! For each declared size the driver runs [`REPEAT`] trials of
//! setup -> timed composed operations -> discard, then emits a single
//! averaged sample to the sink. Setup, teardown, and all shared mutable
//! state (the permutation cache, the sink) stay outside the timed window.
//! Failures are fatal: this is a measurement tool, not a resilient
//! service, and a retry would only contaminate the numbers.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::ops::Operation;
use crate::permutation::PermutationCache;
use crate::setup::Setup;

/// Number of timed trials averaged per (configuration, size).
pub const REPEAT: u32 = 2;

/// Emission granularity of one graph's values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    /// Microseconds.
    Micros,
    /// Milliseconds.
    Millis,
}

impl TimeUnit {
    /// Truncating count of `elapsed` in this unit (duration-cast semantics).
    pub fn count(self, elapsed: Duration) -> u64 {
        match self {
            Self::Micros => elapsed.as_micros() as u64,
            Self::Millis => elapsed.as_millis() as u64,
        }
    }

    /// Axis label: `us` or `ms`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Micros => "us",
            Self::Millis => "ms",
        }
    }
}

/// Receives graph boundaries and samples as the driver produces them.
///
/// Samples arrive in emission order: one per declared size, monotonically
/// in declaration order for a fixed configuration.
pub trait ResultSink {
    /// Begins accumulating a new named graph under `unit`; subsequent
    /// samples attach to it until the next call.
    fn start_graph(&mut self, name: &str, title: &str, unit: TimeUnit);

    /// Appends one sample to the currently active graph.
    fn record(&mut self, series: &str, group: &str, value: u64);
}

/// Mutable state shared across cases but never touched inside a timed
/// window. Owns the run-scoped permutation cache.
#[derive(Debug, Default)]
pub struct BenchContext {
    permutation: PermutationCache,
}

impl BenchContext {
    /// Cached identity permutation for `size` (see [`PermutationCache`]).
    pub fn permutation(&mut self, size: usize) -> &[u64] {
        self.permutation.values(size)
    }
}

/// Averaged emission value: truncating unit cast of the summed elapsed
/// time, divided by [`REPEAT`]. Never the sum, never a single trial.
pub fn mean_elapsed(total: Duration, unit: TimeUnit) -> u64 {
    unit.count(total) / u64::from(REPEAT)
}

/// One declared benchmark configuration.
///
/// Fixes the trial subject `S` (shape x element), the setup strategy, the
/// ordered operation strategies, the size ladder, and the emission unit.
/// Drives exactly one labeled series of results.
pub struct BenchCase<S> {
    series: String,
    sizes: Vec<usize>,
    unit: TimeUnit,
    setup: Box<dyn Setup<S>>,
    ops: Vec<Box<dyn Operation<S>>>,
}

impl<S> BenchCase<S> {
    /// Declares a configuration. `ops` execute in the given order within a
    /// single timed window per trial.
    pub fn new(
        series: impl Into<String>,
        sizes: &[usize],
        unit: TimeUnit,
        setup: Box<dyn Setup<S>>,
        ops: Vec<Box<dyn Operation<S>>>,
    ) -> Self {
        Self { series: series.into(), sizes: sizes.to_vec(), unit, setup, ops }
    }

    /// Runs [`REPEAT`] timed trials per declared size and emits one
    /// averaged sample each, in declaration order.
    pub fn run(&mut self, ctx: &mut BenchContext, sink: &mut dyn ResultSink) {
        // Pre-pay any first-use element initialization before the first
        // trial so it is never attributed to a measurement.
        self.setup.warm();

        for &size in &self.sizes {
            let mut total = Duration::ZERO;
            for _ in 0..REPEAT {
                let mut subject = self.setup.build(size, ctx);

                let start = Instant::now();
                for op in &mut self.ops {
                    op.apply(&mut subject, size);
                }
                total += start.elapsed();
                // subject and its contents are discarded here; nothing
                // carries into the next trial
            }
            debug!(series = %self.series, size, ?total, "trials complete");
            sink.record(&self.series, &size.to_string(), mean_elapsed(total, self.unit));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Pod8;
    use crate::ops::{FillBack, NoOp};
    use crate::setup::Empty;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingSink {
        samples: Vec<(String, String, u64)>,
    }

    impl ResultSink for RecordingSink {
        fn start_graph(&mut self, _name: &str, _title: &str, _unit: TimeUnit) {}

        fn record(&mut self, series: &str, group: &str, value: u64) {
            self.samples.push((series.to_owned(), group.to_owned(), value));
        }
    }

    struct CountingOp {
        calls: Rc<RefCell<Vec<usize>>>,
    }

    impl<S> Operation<S> for CountingOp {
        fn apply(&mut self, _subject: &mut S, size: usize) {
            self.calls.borrow_mut().push(size);
        }
    }

    #[test]
    fn unit_counts_truncate_like_duration_casts() {
        assert_eq!(TimeUnit::Micros.count(Duration::from_nanos(2_999)), 2);
        assert_eq!(TimeUnit::Millis.count(Duration::from_micros(7_999)), 7);
        assert_eq!(TimeUnit::Micros.label(), "us");
        assert_eq!(TimeUnit::Millis.label(), "ms");
    }

    #[test]
    fn mean_is_half_the_total_for_two_repeats() {
        // 1500us + 1500us of trial time -> 1500, not 3000
        let total = Duration::from_micros(3000);
        assert_eq!(mean_elapsed(total, TimeUnit::Micros), 1500);
        // truncating division: 5us total -> 2
        assert_eq!(mean_elapsed(Duration::from_micros(5), TimeUnit::Micros), 2);
        assert_eq!(mean_elapsed(Duration::from_millis(7), TimeUnit::Millis), 3);
    }

    #[test]
    fn emits_one_sample_per_size_in_declaration_order() {
        let mut ctx = BenchContext::default();
        let mut sink = RecordingSink::default();
        let mut case = BenchCase::<Vec<Pod8>>::new(
            "vector",
            &[300, 100, 200],
            TimeUnit::Micros,
            Box::new(Empty),
            vec![Box::new(NoOp)],
        );
        case.run(&mut ctx, &mut sink);

        let groups: Vec<&str> = sink.samples.iter().map(|s| s.1.as_str()).collect();
        assert_eq!(groups, ["300", "100", "200"]);
        assert!(sink.samples.iter().all(|s| s.0 == "vector"));
    }

    #[test]
    fn each_operation_runs_repeat_times_per_size() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut ctx = BenchContext::default();
        let mut sink = RecordingSink::default();
        let mut case = BenchCase::<Vec<Pod8>>::new(
            "vector",
            &[10, 20],
            TimeUnit::Micros,
            Box::new(Empty),
            vec![Box::new(CountingOp { calls: Rc::clone(&calls) })],
        );
        case.run(&mut ctx, &mut sink);

        assert_eq!(*calls.borrow(), [10, 10, 20, 20]);
    }

    #[test]
    fn composed_operations_run_in_declared_order() {
        let mut ctx = BenchContext::default();
        let mut sink = RecordingSink::default();
        // Reserve-then-fill composition must leave `size` elements behind;
        // observed indirectly through a fill that appends after the counter
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut case = BenchCase::<Vec<Pod8>>::new(
            "vector_pre",
            &[50],
            TimeUnit::Micros,
            Box::new(Empty),
            vec![
                Box::new(CountingOp { calls: Rc::clone(&calls) }),
                Box::new(FillBack),
                Box::new(CountingOp { calls: Rc::clone(&calls) }),
            ],
        );
        case.run(&mut ctx, &mut sink);
        // both counters fired once per trial, around the fill
        assert_eq!(calls.borrow().len(), 4);
        assert_eq!(sink.samples.len(), 1);
    }
}
