// SPDX-License-Identifier: Apache-2.0
//! Gauge entrypoint.
//!
//! Runs the fixed benchmark matrix declared in [`suite`] and writes the
//! resulting chart document to `graph.html` in the working directory. The
//! matrix is fixed at build time; there are no flags. Progress appears on
//! the log as each graph starts and each sample lands.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, unused_must_use)]
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

mod suite;

use std::path::Path;

use anyhow::Context as _;
use tracing::info;

use gauge_core::BenchContext;
use gauge_report::{GraphSet, RenderFormat};

const OUTPUT_PATH: &str = "graph.html";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut ctx = BenchContext::default();
    let mut graphs = GraphSet::default();
    suite::run(&mut ctx, &mut graphs);
    info!(graphs = graphs.graphs().len(), "suite complete");

    let out = Path::new(OUTPUT_PATH);
    graphs
        .render(RenderFormat::GoogleCharts, out)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
