//! Example of drawing the DFS intervals of a puzzle.
//! I use it with `cargo run --example intervals | dot -Tsvg > intervals.svg`

use floe_crossing::debugging::draw_intervals;
use floe_crossing::input::from_file;
use floe_crossing::{NORTH, build_graph, traverse};

fn main() {
    env_logger::init();

    let puzzle = from_file("assets/chain.in").expect("assets/chain.in should be a valid puzzle");
    let built = build_graph(puzzle.north_y, puzzle.south_y, puzzle.radius, &puzzle.floes);
    let table = traverse(&built.graph, NORTH);

    print!("{}", draw_intervals(&built.graph, &table));
}
