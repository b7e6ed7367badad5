use dot::{Edges, GraphWalk, Labeller, Nodes};

use crate::traversal::IntervalTable;
use crate::{ComponentGraph, ComponentId};

type Node = ComponentId;

#[derive(Debug, Clone)]
struct Edge {
    source: Node,
    target: Node,
    tree: bool,
}

struct Graph<'a> {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    table: &'a IntervalTable,
}

impl<'a> Labeller<'a, Node, Edge> for Graph<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("G").expect("`G` is a valid dot id")
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).expect("`N<number>` is a valid dot id")
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        dot::LabelText::label(format!(
            "{}\nd:{} f:{}\n{}\np:{}",
            n,
            self.table.discovery(*n),
            self.table.finish(*n),
            self.table.colour(*n),
            match self.table.ancestor(*n) {
                Some(p) => p.to_string(),
                None => "Root".to_string(),
            },
        ))
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(if e.tree { "tree" } else { "merge" })
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for Graph<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

/// Returns the DFS result over `graph` in dot format.
///
/// Every component is labelled with its discovery/finish times, colour and
/// DFS parent. Tree edges point from parent to child, other merges are drawn
/// once from the smaller id.
///
/// I use it with `dot`, not `neato`.
pub fn draw_intervals(graph: &ComponentGraph, table: &IntervalTable) -> String {
    let mut g = Graph {
        nodes: (0..graph.len()).collect(),
        edges: Vec::new(),
        table,
    };

    for u in 0..graph.len() {
        for v in graph.neighbours(u) {
            if table.ancestor(v) == Some(u) {
                g.edges.push(Edge {
                    source: u,
                    target: v,
                    tree: true,
                });
            } else if u < v && table.ancestor(u) != Some(v) {
                g.edges.push(Edge {
                    source: u,
                    target: v,
                    tree: false,
                });
            }
        }
    }

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&g, &mut buffer).expect("writing to memory does not fail");
    String::from_utf8(buffer.into_inner()).expect("dot output is utf-8")
}

/// Plain text dump of every non-empty chain, one line per component.
pub fn print_graph(graph: &ComponentGraph) -> String {
    let mut out = String::new();
    for id in 0..graph.len() {
        let mut chain = graph.chain(id).peekable();
        if chain.peek().is_none() {
            continue;
        }
        for node in chain {
            out.push_str(&format!("| {} | -> ", node.coordinate));
        }
        out.push_str("null\n");
    }
    out
}
