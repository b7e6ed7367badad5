//! Writes the component graph of `assets/chain.in` to `chain.dot`.
//! I use it with `cargo run --example output && neato -Tsvg chain.dot > chain.svg`

use floe_crossing::build_graph;
use floe_crossing::input::from_file;
use floe_crossing::output::to_dot_file;

fn main() {
    env_logger::init();

    let puzzle = from_file("assets/chain.in").expect("assets/chain.in should be a valid puzzle");
    let built = build_graph(puzzle.north_y, puzzle.south_y, puzzle.radius, &puzzle.floes);

    to_dot_file(&built.graph, "chain.dot").expect("chain.dot should be writable");
}
