use petgraph::graph::{NodeIndex, UnGraph};

use crate::{ComponentGraph, Coordinate};

/// Converts the chains into a petgraph graph.
///
/// Node `k` of the result is component `k`, weighted with its representative
/// coordinate (default for components never seeded). Every merged pair becomes
/// one undirected edge.
pub fn to_petgraph(graph: &ComponentGraph) -> UnGraph<Coordinate, ()> {
    let mut out = UnGraph::with_capacity(graph.len(), graph.merge_count());
    for id in 0..graph.len() {
        out.add_node(graph.representative(id).unwrap_or_default());
    }

    for u in 0..graph.len() {
        for v in graph.neighbours(u) {
            if u < v {
                out.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_floes::random_floes;
    use crate::traversal::{Clock, traverse, traverse_with};
    use crate::{NORTH, SOUTH, build_graph};
    use petgraph::algo::has_path_connecting;

    #[test]
    fn test_edges_match_merges() {
        let floes = [Coordinate::new(0, 30), Coordinate::new(0, 65)];
        let built = build_graph(0, 100, 40, &floes);
        let g = to_petgraph(&built.graph);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), built.graph.merge_count());
        assert_eq!(g[NodeIndex::new(3)], Coordinate::new(0, 65));
    }

    #[test]
    fn test_dfs_reaches_what_petgraph_reaches() {
        for seed in 0..40 {
            let floes = random_floes(30, 150, seed);
            let built = build_graph(0, 150, 30, &floes);
            let g = to_petgraph(&built.graph);

            for clock in [Clock::Frame, Clock::Shared] {
                let table = traverse_with(&built.graph, NORTH, clock);
                for v in 0..built.graph.len() {
                    let expected =
                        has_path_connecting(&g, NodeIndex::new(NORTH), NodeIndex::new(v), None);
                    assert_eq!(table.is_visited(v), expected, "seed {} component {}", seed, v);
                }
            }
        }
    }

    #[test]
    fn test_south_reachability_matches() {
        let floes = [Coordinate::new(0, 30), Coordinate::new(0, 70)];
        let built = build_graph(0, 100, 40, &floes);
        let g = to_petgraph(&built.graph);
        let table = traverse(&built.graph, NORTH);
        assert!(!has_path_connecting(&g, NodeIndex::new(NORTH), NodeIndex::new(SOUTH), None));
        assert!(!table.is_visited(SOUTH));
    }
}
