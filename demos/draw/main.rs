//! I use it with `cargo run --example draw | neato -Tsvg > floes.svg`

use floe_crossing::build_graph;
use floe_crossing::input::from_file;
use floe_crossing::output::draw_graph;

fn main() {
    env_logger::init();

    let puzzle = from_file("assets/chain.in").expect("assets/chain.in should be a valid puzzle");
    let built = build_graph(puzzle.north_y, puzzle.south_y, puzzle.radius, &puzzle.floes);

    print!("{}", draw_graph(&built.graph))
}
