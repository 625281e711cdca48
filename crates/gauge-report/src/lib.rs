// SPDX-License-Identifier: Apache-2.0
//! gauge-report: accumulates benchmark samples and renders them.
//!
//! Implements the [`ResultSink`] side of the harness: graphs accumulate as
//! the suite runs (with a textual progress trace on the way through), then
//! the full set renders once at the end, either as a self-contained
//! Google-charts HTML document with a linear/log scale toggle per graph, or
//! as a JSON dump of every sample.
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
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod html;

use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use gauge_core::{ResultSink, TimeUnit};

/// One appended measurement: a (series, group, value) triple.
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    /// Chart line this sample belongs to (container-shape label).
    pub series: String,
    /// X-axis category (workload size, as a string).
    pub group: String,
    /// Averaged duration in the owning graph's unit.
    pub value: u64,
}

/// Named, titled collection of samples sharing one display unit.
#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    /// Identifier used in element ids and function names of the rendered
    /// document; unique per benchmark category.
    pub name: String,
    /// Human-readable chart title.
    pub title: String,
    /// Y-axis unit label (`us` or `ms`).
    pub unit: String,
    /// Samples in emission order.
    pub samples: Vec<Sample>,
}

/// Accumulates graphs as the suite runs; renders once at the end.
#[derive(Debug, Default)]
pub struct GraphSet {
    graphs: Vec<Graph>,
}

/// Output flavor for [`GraphSet::render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderFormat {
    /// Self-contained Google-charts HTML document.
    GoogleCharts,
    /// Machine-readable JSON dump of every graph.
    Json,
}

/// Failures while writing a rendered report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem write failed.
    #[error("writing report: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization failed.
    #[error("serializing report: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphSet {
    /// Graphs accumulated so far, in start order.
    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    /// Renders the full accumulated sample set to `path`.
    pub fn render(&self, format: RenderFormat, path: &Path) -> Result<(), ReportError> {
        let body = match format {
            RenderFormat::GoogleCharts => html::document(&self.graphs),
            RenderFormat::Json => serde_json::to_string_pretty(&self.graphs)?,
        };
        std::fs::write(path, body)?;
        info!(path = %path.display(), ?format, "report written");
        Ok(())
    }
}

impl ResultSink for GraphSet {
    fn start_graph(&mut self, name: &str, title: &str, unit: TimeUnit) {
        info!("Start {name}");
        self.graphs.push(Graph {
            name: name.to_owned(),
            title: title.to_owned(),
            unit: unit.label().to_owned(),
            samples: Vec::new(),
        });
    }

    fn record(&mut self, series: &str, group: &str, value: u64) {
        info!("{series}:{group}:{value}");
        let Some(graph) = self.graphs.last_mut() else {
            unreachable!("record() before start_graph() is a driver bug");
        };
        graph.samples.push(Sample {
            series: series.to_owned(),
            group: group.to_owned(),
            value,
        });
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn sample_set() -> GraphSet {
        let mut set = GraphSet::default();
        set.start_graph("fill_back_8", "fill_back - 8 byte", TimeUnit::Micros);
        set.record("vector", "900", 10);
        set.record("list", "900", 42);
        set.record("vector", "10000", 25);
        set.record("list", "10000", 99);
        set
    }

    #[test]
    fn samples_attach_to_the_active_graph() {
        let mut set = sample_set();
        set.start_graph("sort_8", "sort - 8 byte", TimeUnit::Millis);
        set.record("deque", "100", 7);

        assert_eq!(set.graphs().len(), 2);
        assert_eq!(set.graphs()[0].samples.len(), 4);
        assert_eq!(set.graphs()[1].samples.len(), 1);
        assert_eq!(set.graphs()[1].unit, "ms");
        assert_eq!(set.graphs()[1].samples[0].series, "deque");
    }

    #[test]
    fn samples_keep_emission_order() {
        let set = sample_set();
        let order: Vec<&str> = set.graphs()[0]
            .samples
            .iter()
            .map(|s| s.series.as_str())
            .collect();
        assert_eq!(order, ["vector", "list", "vector", "list"]);
    }

    #[test]
    fn json_render_round_trips() {
        let set = sample_set();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        set.render(RenderFormat::Json, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed[0]["name"], "fill_back_8");
        assert_eq!(parsed[0]["unit"], "us");
        assert_eq!(parsed[0]["samples"][0]["series"], "vector");
        assert_eq!(parsed[0]["samples"][0]["value"], 10);
    }

    #[test]
    fn html_render_writes_a_document() {
        let set = sample_set();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.html");
        set.render(RenderFormat::GoogleCharts, &path).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.contains("function draw_fill_back_8()"));
        assert!(body.contains("graph_button_fill_back_8"));
    }
}
