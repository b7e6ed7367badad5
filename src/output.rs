use crate::verdict::Verdict;
use crate::{ComponentGraph, NORTH, SOUTH};

/// The answer line, `YES` or `NO` followed by a newline.
pub fn render_verdict(verdict: Verdict) -> String {
    format!("{}\n", verdict)
}

/// Returns the component graph in DOT format.
///
/// Every component is a vertex labelled with its id and representative
/// coordinate. Each merge shows up as one edge. Poles are coloured.
///
/// Intended to be used with `neato`.
pub fn draw_graph(graph: &ComponentGraph) -> String {
    let mut output = String::from("graph {\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

    for id in 0..graph.len() {
        let label = match graph.representative(id) {
            Some(c) => format!("{}\\n({}, {})", id, c.x, c.y),
            None => id.to_string(),
        };
        let color = match id {
            NORTH => ", fillcolor=green",
            SOUTH => ", fillcolor=orange",
            _ => "",
        };
        output.push_str(&format!("  {} [label=\"{}\"{}];\n", id, label, color));
    }

    // a merge puts each side into the other's chain, draw it once
    for u in 0..graph.len() {
        for v in graph.neighbours(u).skip(1) {
            if u < v {
                output.push_str(&format!("  {} -- {};\n", u, v));
            }
        }
    }
    output.push_str("}\n");
    output
}

/// Writes the component graph to a file in DOT format.
pub fn to_dot_file(graph: &ComponentGraph, path: &str) -> std::io::Result<()> {
    to_file(&draw_graph(graph), path)
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &str) -> std::io::Result<()> {
    std::fs::write(path, content)
}
