use fixedbitset::FixedBitSet;

use crate::{Colour, ComponentGraph, ComponentId};

/// How discovery and finish times are counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Clock {
    /// Every visit counts from its caller's time: a component is discovered
    /// one tick after its DFS parent and finishes one tick after its own
    /// discovery.
    #[default]
    Frame,
    /// One counter for the whole walk, the usual DFS bookkeeping where
    /// descendant intervals nest inside ancestor intervals.
    Shared,
}

/// Per-component DFS results. Unreached components keep colour
/// [`Colour::Unvisited`] and timestamps `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTable {
    ancestor: Vec<Option<ComponentId>>,
    discovery: Vec<usize>,
    finish: Vec<usize>,
    colour: Vec<Colour>,
}

impl IntervalTable {
    fn new(size: usize) -> Self {
        Self {
            ancestor: vec![None; size],
            discovery: vec![0; size],
            finish: vec![0; size],
            colour: vec![Colour::Unvisited; size],
        }
    }

    pub fn len(&self) -> usize {
        self.colour.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colour.is_empty()
    }

    pub fn discovery(&self, id: ComponentId) -> usize {
        self.discovery[id]
    }

    pub fn finish(&self, id: ComponentId) -> usize {
        self.finish[id]
    }

    pub fn colour(&self, id: ComponentId) -> Colour {
        self.colour[id]
    }

    /// DFS parent of `id`. `None` for the root and for unreached components.
    pub fn ancestor(&self, id: ComponentId) -> Option<ComponentId> {
        self.ancestor[id]
    }

    pub fn is_visited(&self, id: ComponentId) -> bool {
        self.colour[id] != Colour::Unvisited
    }

    /// Set of all components reached by the walk.
    pub fn visited(&self) -> FixedBitSet {
        let mut set = FixedBitSet::with_capacity(self.len());
        for (id, colour) in self.colour.iter().enumerate() {
            if *colour != Colour::Unvisited {
                set.insert(id);
            }
        }
        set
    }
}

/// Depth-first walk over the component graph from `root`, with the default
/// [`Clock::Frame`] timestamps.
pub fn traverse(graph: &ComponentGraph, root: ComponentId) -> IntervalTable {
    traverse_with(graph, root, Clock::Frame)
}

/// Same as [`traverse`] with an explicit clock.
///
/// Only one walk is started; components not reachable from `root` stay
/// unvisited. Neighbours are taken in chain order, the component's own head
/// node included (it is already in progress, so it is skipped).
pub fn traverse_with(graph: &ComponentGraph, root: ComponentId, clock: Clock) -> IntervalTable {
    let mut dfs = Dfs {
        graph,
        clock,
        time: 0,
        table: IntervalTable::new(graph.len()),
        stack: Vec::with_capacity(graph.len()),
    };
    dfs.run(root);
    dfs.table
}

struct Frame {
    component: ComponentId,
    cursor: Option<usize>, // next chain node to look at
    time: usize,
}

struct Dfs<'a> {
    graph: &'a ComponentGraph,
    clock: Clock,
    time: usize,
    table: IntervalTable,
    stack: Vec<Frame>,
}

impl Dfs<'_> {
    fn tick(&mut self, local: usize) -> usize {
        match self.clock {
            Clock::Frame => local + 1,
            Clock::Shared => {
                self.time += 1;
                self.time
            }
        }
    }

    fn enter(&mut self, v: ComponentId, parent: Option<ComponentId>, parent_time: usize) {
        let t = self.tick(parent_time);
        self.table.discovery[v] = t;
        self.table.colour[v] = Colour::InProgress;
        self.table.ancestor[v] = parent;
        log::trace!("discover {} at {}", v, t);

        self.stack.push(Frame {
            component: v,
            cursor: self.graph.head_of(v),
            time: t,
        });
    }

    fn leave(&mut self, v: ComponentId, local: usize) {
        let t = self.tick(local);
        self.table.finish[v] = t;
        self.table.colour[v] = Colour::Done;
        log::trace!("finish {} at {}", v, t);
    }

    fn run(&mut self, root: ComponentId) {
        self.enter(root, None, 0);

        while let Some(frame) = self.stack.last_mut() {
            let (v, local) = (frame.component, frame.time);
            match frame.cursor {
                Some(idx) => {
                    frame.cursor = self.graph.next_of(idx);
                    let w = self.graph.node(idx).component;
                    if self.table.colour[w] == Colour::Unvisited {
                        self.enter(w, Some(v), local);
                    }
                }
                None => {
                    self.stack.pop();
                    self.leave(v, local);
                }
            }
        }
    }
}
