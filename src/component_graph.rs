use crate::{ComponentId, Coordinate};

/// One link of a component's chain.
///
/// `coordinate` is the coordinate of `component` at the time the node was
/// appended. It is never read back for distance checks, so a later re-seed of
/// `component` can leave it stale without changing any verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphNode {
    pub coordinate: Coordinate,
    pub component: ComponentId,
    next: Option<usize>,
}

impl GraphNode {
    pub fn new(coordinate: Coordinate, component: ComponentId) -> Self {
        Self {
            coordinate,
            component,
            next: None,
        }
    }
}

/// Adjacency chains indexed by component id.
///
/// Nodes live in one arena and are linked by index. Every component id owns a
/// singly-linked chain; `head[k]` is its first node and `tail[k]` its last, so
/// appending never walks the chain.
#[derive(Debug, Clone)]
pub struct ComponentGraph {
    nodes: Vec<GraphNode>,
    head: Vec<Option<usize>>,
    tail: Vec<Option<usize>>,
    representative: Vec<Option<Coordinate>>,
    merges: usize,
}

impl ComponentGraph {
    /// Creates `size` empty chains.
    pub fn new(size: usize) -> Self {
        Self {
            nodes: Vec::new(),
            head: vec![None; size],
            tail: vec![None; size],
            representative: vec![None; size],
            merges: 0,
        }
    }

    /// Number of component ids.
    pub fn len(&self) -> usize {
        self.head.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_empty()
    }

    /// Total number of nodes over all chains.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of [`merge`](Self::merge) calls so far.
    pub fn merge_count(&self) -> usize {
        self.merges
    }

    fn check_id(&self, id: ComponentId) {
        assert!(
            id < self.len(),
            "component id {} out of range, graph has {} components",
            id,
            self.len()
        );
    }

    /// Links `node` after the last node of chain `id`, or makes it the head
    /// if the chain is empty.
    pub fn append(&mut self, id: ComponentId, node: GraphNode) {
        self.check_id(id);

        let idx = self.nodes.len();
        self.nodes.push(GraphNode { next: None, ..node });

        match self.tail[id] {
            None => self.head[id] = Some(idx),
            Some(last) => self.nodes[last].next = Some(idx),
        }
        self.tail[id] = Some(idx);
    }

    /// Sets the coordinate that other chains receive when `id` is merged with
    /// them. The first call also puts the self node at the head of the chain.
    pub fn seed(&mut self, id: ComponentId, coordinate: Coordinate) {
        self.check_id(id);

        if self.head[id].is_none() {
            self.append(id, GraphNode::new(coordinate, id));
        }
        self.representative[id] = Some(coordinate);
    }

    /// Current representative coordinate of `id`, if it was seeded.
    pub fn representative(&self, id: ComponentId) -> Option<Coordinate> {
        self.check_id(id);
        self.representative[id]
    }

    /// Records that `target` and `source` can reach each other.
    ///
    /// A node for `source` goes to the end of `target`'s chain and a node for
    /// `target` (with its representative coordinate) to the end of `source`'s
    /// chain. Both ids stay distinct.
    pub fn merge(
        &mut self,
        target: ComponentId,
        source: ComponentId,
        source_coordinate: Coordinate,
    ) {
        self.check_id(target);
        self.check_id(source);

        let target_coordinate = self.representative[target].unwrap_or_else(|| {
            panic!("component {} merged before being seeded", target)
        });

        self.append(target, GraphNode::new(source_coordinate, source));
        self.append(source, GraphNode::new(target_coordinate, target));
        self.representative[source] = Some(source_coordinate);
        self.merges += 1;

        log::debug!("merged component {} into {}", source, target);
    }

    /// Iterates over the nodes of chain `id`, head first.
    pub fn chain(&self, id: ComponentId) -> Chain<'_> {
        self.check_id(id);
        Chain {
            graph: self,
            current: self.head[id],
        }
    }

    /// Component ids along chain `id`, including `id` itself at the head.
    pub fn neighbours(&self, id: ComponentId) -> impl Iterator<Item = ComponentId> + '_ {
        self.chain(id).map(|node| node.component)
    }

    /// Node index following `node_idx` in its chain.
    pub(crate) fn next_of(&self, node_idx: usize) -> Option<usize> {
        self.nodes[node_idx].next
    }

    pub(crate) fn head_of(&self, id: ComponentId) -> Option<usize> {
        self.check_id(id);
        self.head[id]
    }

    pub(crate) fn node(&self, node_idx: usize) -> &GraphNode {
        &self.nodes[node_idx]
    }
}

/// Iterator over one chain of a [`ComponentGraph`].
pub struct Chain<'a> {
    graph: &'a ComponentGraph,
    current: Option<usize>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a GraphNode;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let node = &self.graph.nodes[idx];
        self.current = node.next;
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(graph: &ComponentGraph, id: ComponentId) -> Vec<ComponentId> {
        graph.neighbours(id).collect()
    }

    #[test]
    fn test_append_to_empty_and_tail() {
        let mut g = ComponentGraph::new(3);
        assert_eq!(g.chain(0).count(), 0);

        g.append(0, GraphNode::new(Coordinate::new(0, 0), 0));
        g.append(0, GraphNode::new(Coordinate::new(1, 1), 2));
        g.append(0, GraphNode::new(Coordinate::new(2, 2), 1));

        assert_eq!(ids(&g, 0), vec![0, 2, 1]);
        assert_eq!(g.chain(1).count(), 0);
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn test_append_keeps_chains_separate() {
        let mut g = ComponentGraph::new(2);
        g.append(0, GraphNode::new(Coordinate::new(0, 0), 0));
        g.append(1, GraphNode::new(Coordinate::new(0, 5), 1));
        g.append(0, GraphNode::new(Coordinate::new(0, 5), 1));
        g.append(1, GraphNode::new(Coordinate::new(0, 0), 0));

        assert_eq!(ids(&g, 0), vec![0, 1]);
        assert_eq!(ids(&g, 1), vec![1, 0]);
    }

    #[test]
    fn test_merge_is_mutual() {
        let mut g = ComponentGraph::new(4);
        g.seed(0, Coordinate::pole(0));
        g.seed(2, Coordinate::new(0, 30));
        g.merge(0, 2, Coordinate::new(0, 30));

        assert_eq!(ids(&g, 0), vec![0, 2]);
        assert_eq!(ids(&g, 2), vec![2, 0]);
        assert_eq!(g.merge_count(), 1);

        let nodes: Vec<_> = g.chain(2).copied().collect();
        assert_eq!(nodes[1].coordinate, Coordinate::pole(0));
        assert_eq!(g.chain(0).nth(1).unwrap().coordinate, Coordinate::new(0, 30));
    }

    #[test]
    fn test_seed_twice_keeps_single_head() {
        let mut g = ComponentGraph::new(3);
        g.seed(2, Coordinate::new(4, 4));
        g.seed(2, Coordinate::new(5, 5));
        assert_eq!(ids(&g, 2), vec![2]);
        assert_eq!(g.representative(2), Some(Coordinate::new(5, 5)));
        assert_eq!(g.representative(1), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_append_out_of_range_panics() {
        let mut g = ComponentGraph::new(2);
        g.append(2, GraphNode::new(Coordinate::new(0, 0), 2));
    }

    #[test]
    #[should_panic(expected = "before being seeded")]
    fn test_merge_unseeded_target_panics() {
        let mut g = ComponentGraph::new(3);
        g.merge(0, 2, Coordinate::new(0, 0));
    }
}
