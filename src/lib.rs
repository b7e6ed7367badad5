//! # floe_crossing
//!
//! Decides whether a bear standing on the north pole gets its way across a
//! field of ice floes to the south pole.
//!
//! Floes and poles closer than the jump radius are merged into components,
//! kept as linked adjacency chains per component id. One DFS from the north
//! pole produces discovery/finish times, and the verdict compares the
//! intervals of both poles.
//!
//! ```
//! use floe_crossing::{Coordinate, Puzzle, Verdict, solve};
//!
//! let puzzle = Puzzle::new(0, 100, 60, vec![Coordinate::new(0, 50)]);
//! assert_eq!(solve(&puzzle), Verdict::No);
//! ```

pub mod builder;
pub mod component_graph;
pub mod convert;
pub mod debugging;
pub mod geometry;
pub mod input;
pub mod output;
pub mod solver;
pub mod traversal;
pub mod types;
pub mod verdict;

#[cfg(test)]
mod testing;

pub use builder::{BuiltGraph, build_graph};
pub use component_graph::{ComponentGraph, GraphNode};
pub use input::{InputError, from_file, from_str};
pub use solver::{solve, solve_with};
pub use traversal::{Clock, IntervalTable, traverse, traverse_with};
pub use types::{Colour, ComponentId, Coordinate, NORTH, POLES, Puzzle, SOUTH};
pub use verdict::{Verdict, evaluate};
