use crate::traversal::{Clock, traverse_with};
use crate::verdict::{Verdict, evaluate};
use crate::{Puzzle, build_graph};

/// Builds the graph, runs the DFS and evaluates the result.
pub fn solve(puzzle: &Puzzle) -> Verdict {
    solve_with(puzzle, Clock::Frame)
}

/// [`solve`] with an explicit DFS clock.
///
/// The DFS is skipped entirely when the builder already ruled the crossing out.
pub fn solve_with(puzzle: &Puzzle, clock: Clock) -> Verdict {
    let built = build_graph(puzzle.north_y, puzzle.south_y, puzzle.radius, &puzzle.floes);

    if !built.should_try {
        log::info!("a floe touches both poles, not trying");
        return Verdict::No;
    }

    let table = traverse_with(&built.graph, built.north, clock);
    let verdict = Verdict::from(evaluate(&table, built.north, built.south, built.should_try));

    log::info!(
        "north [{}, {}], south [{}, {}] ({}), verdict {}",
        table.discovery(built.north),
        table.finish(built.north),
        table.discovery(built.south),
        table.finish(built.south),
        table.colour(built.south),
        verdict
    );
    verdict
}
