// SPDX-License-Identifier: Apache-2.0
//! Google-charts HTML writer.
//!
//! Emits one `draw_<name>` function and one chart div per graph, a
//! `draw_all` onload callback, and a per-graph button toggling the y-axis
//! between linear and logarithmic scale. Group columns are ordered by
//! parsing the group label as an integer, so the size axis stays correct
//! regardless of label width.

use std::fmt::Write as _;

use crate::Graph;

/// Renders the full document for `graphs`.
pub(crate) fn document(graphs: &[Graph]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html>");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(
        out,
        "<script type=\"text/javascript\" src=\"https://www.gstatic.com/charts/loader.js\"></script>"
    );
    let _ = writeln!(out, "<script type=\"text/javascript\">");
    let _ = writeln!(out, "google.charts.load('current', {{packages: ['corechart']}});");

    for graph in graphs {
        draw_function(&mut out, graph);
    }

    let _ = writeln!(out, "function draw_all() {{");
    for graph in graphs {
        let _ = writeln!(out, "draw_{}();", graph.name);
    }
    let _ = writeln!(out, "}}");
    let _ = writeln!(out, "google.charts.setOnLoadCallback(draw_all);");
    let _ = writeln!(out, "</script>");
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");

    for graph in graphs {
        let _ = writeln!(
            out,
            "<div id=\"graph_{}\" style=\"width: 600px; height: 400px;\"></div>",
            graph.name
        );
        let _ = writeln!(
            out,
            "<input id=\"graph_button_{}\" type=\"button\" value=\"Logarithmic scale\">",
            graph.name
        );
    }

    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

fn draw_function(out: &mut String, graph: &Graph) {
    let series = series_order(graph);
    let groups = numeric_group_order(graph);

    let _ = writeln!(out, "function draw_{}() {{", graph.name);
    let _ = writeln!(out, "var data = google.visualization.arrayToDataTable([");

    let _ = write!(out, "['x'");
    for name in &series {
        let _ = write!(out, ", '{name}'");
    }
    let _ = writeln!(out, "],");

    for group in &groups {
        let _ = write!(out, "['{group}'");
        for name in &series {
            let _ = write!(out, ", {}", value_for(graph, name, group));
        }
        let _ = writeln!(out, "],");
    }

    let _ = writeln!(out, "]);");
    let _ = writeln!(
        out,
        "var chart = new google.visualization.LineChart(document.getElementById('graph_{}'));",
        graph.name
    );
    let _ = writeln!(
        out,
        "var options = {{curveType: 'function', title: '{}', \
         animation: {{duration: 1200, easing: 'in'}}, width: 600, height: 400, \
         hAxis: {{title: 'Number of elements', slantedText: true}}, \
         vAxis: {{viewWindow: {{min: 0}}, title: '{}'}}}};",
        graph.title, graph.unit
    );
    let _ = writeln!(out, "chart.draw(data, options);");
    let _ = writeln!(
        out,
        "var button = document.getElementById('graph_button_{}');",
        graph.name
    );
    let _ = writeln!(out, "button.onclick = function() {{");
    let _ = writeln!(out, "if (options.vAxis.logScale) {{");
    let _ = writeln!(out, "button.value = 'Logarithmic scale';");
    let _ = writeln!(out, "}} else {{");
    let _ = writeln!(out, "button.value = 'Linear scale';");
    let _ = writeln!(out, "}}");
    let _ = writeln!(out, "options.vAxis.logScale = !options.vAxis.logScale;");
    let _ = writeln!(out, "chart.draw(data, options);");
    let _ = writeln!(out, "}};");
    let _ = writeln!(out, "}}");
}

/// Series columns in first-emission order.
fn series_order(graph: &Graph) -> Vec<String> {
    let mut series = Vec::new();
    for sample in &graph.samples {
        if !series.contains(&sample.series) {
            series.push(sample.series.clone());
        }
    }
    series
}

/// Distinct group labels ordered by their integer value, not lexically.
fn numeric_group_order(graph: &Graph) -> Vec<String> {
    let mut groups = Vec::new();
    for sample in &graph.samples {
        if !groups.contains(&sample.group) {
            groups.push(sample.group.clone());
        }
    }
    groups.sort_by_key(|group| group.parse::<i64>().unwrap_or(0));
    groups
}

/// Last emitted value for (series, group); 0 when never emitted.
fn value_for(graph: &Graph, series: &str, group: &str) -> u64 {
    graph
        .samples
        .iter()
        .rev()
        .find(|s| s.series == series && s.group == group)
        .map_or(0, |s| s.value)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::Sample;

    fn graph() -> Graph {
        let samples = [
            ("vector", "900", 10),
            ("vector", "10000", 25),
            ("list", "900", 42),
            ("list", "10000", 99),
        ]
        .into_iter()
        .map(|(series, group, value)| Sample {
            series: series.to_owned(),
            group: group.to_owned(),
            value,
        })
        .collect();
        Graph {
            name: "linear_search_8".to_owned(),
            title: "linear_search - 8 byte".to_owned(),
            unit: "us".to_owned(),
            samples,
        }
    }

    #[test]
    fn groups_order_numerically_not_lexically() {
        let ordered = numeric_group_order(&graph());
        assert_eq!(ordered, ["900", "10000"]);
    }

    #[test]
    fn series_keep_first_emission_order() {
        assert_eq!(series_order(&graph()), ["vector", "list"]);
    }

    #[test]
    fn data_rows_follow_numeric_group_order() {
        let body = document(&[graph()]);
        let first = body.find("['900'").unwrap_or(usize::MAX);
        let second = body.find("['10000'").unwrap_or(usize::MAX);
        assert!(first < second, "'900' row must precede '10000'");
    }

    #[test]
    fn document_wires_charts_and_toggle_buttons() {
        let body = document(&[graph()]);
        assert!(body.contains("function draw_linear_search_8()"));
        assert!(body.contains("draw_linear_search_8();"));
        assert!(body.contains("google.charts.setOnLoadCallback(draw_all);"));
        assert!(body.contains("options.vAxis.logScale = !options.vAxis.logScale;"));
        assert!(body.contains("id=\"graph_linear_search_8\""));
        assert!(body.contains("id=\"graph_button_linear_search_8\""));
        assert!(body.contains("vAxis: {viewWindow: {min: 0}, title: 'us'}"));
    }

    #[test]
    fn missing_series_group_pairs_render_as_zero() {
        let mut partial = graph();
        partial.samples.pop();
        let body = document(&[partial]);
        // the list/10000 cell falls back to 0
        assert!(body.contains("['10000', 25, 0],"));
    }
}
