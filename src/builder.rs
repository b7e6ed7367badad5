use crate::geometry::{pole_within_jump, within_jump};
use crate::{ComponentGraph, ComponentId, Coordinate, NORTH, POLES, SOUTH};

/// Output of [`build_graph`].
#[derive(Debug, Clone)]
pub struct BuiltGraph {
    pub graph: ComponentGraph,
    /// False if some floe lies within jumping distance of both poles.
    pub should_try: bool,
    pub north: ComponentId,
    pub south: ComponentId,
}

/// Builds the component graph for the given poles and floes.
///
/// Floe `k` of the slice gets component id `k + 2`. Floes are processed in
/// order; each one is compared with both poles and with every earlier floe,
/// and merged with whatever is strictly closer than `radius`.
///
/// A floe that is within reach of both poles at once makes `should_try`
/// false, independent of everything else.
pub fn build_graph(north_y: i32, south_y: i32, radius: i32, floes: &[Coordinate]) -> BuiltGraph {
    let mut graph = ComponentGraph::new(floes.len() + POLES);
    let mut should_try = true;

    let north_pole = Coordinate::pole(north_y);
    let south_pole = Coordinate::pole(south_y);
    graph.seed(NORTH, north_pole);
    graph.seed(SOUTH, south_pole);

    for (k, &c) in floes.iter().enumerate() {
        let id = k + POLES;
        graph.seed(id, c);

        let to_north = pole_within_jump(c, north_y, radius);
        let to_south = pole_within_jump(c, south_y, radius);

        if to_north && to_south {
            log::debug!("floe {} at ({}) reaches both poles", id, c);
            should_try = false;
        }

        if to_north {
            graph.merge(NORTH, id, c);
            graph.seed(NORTH, north_pole);
        }
        if to_south {
            graph.merge(SOUTH, id, c);
            graph.seed(SOUTH, south_pole);
        }

        // earlier floes are read from `floes`, never from chain nodes
        for (j, &other) in floes[..k].iter().enumerate() {
            if within_jump(c, other, radius) {
                let other_id = j + POLES;
                graph.merge(other_id, id, c);
                graph.seed(other_id, other);
            }
        }
    }

    log::debug!(
        "built component graph: {} components, {} merges, should_try = {}",
        graph.len(),
        graph.merge_count(),
        should_try
    );

    BuiltGraph {
        graph,
        should_try,
        north: NORTH,
        south: SOUTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(built: &BuiltGraph, id: ComponentId) -> Vec<ComponentId> {
        built.graph.neighbours(id).collect()
    }

    #[test]
    fn test_no_floes() {
        let built = build_graph(0, 10, 11, &[]);
        assert_eq!(built.graph.len(), 2);
        assert_eq!(ids(&built, NORTH), vec![NORTH]);
        assert_eq!(ids(&built, SOUTH), vec![SOUTH]);
        assert!(built.should_try);
        assert_eq!(built.graph.merge_count(), 0);
    }

    #[test]
    fn test_floe_reaching_both_poles_disqualifies() {
        let built = build_graph(0, 100, 60, &[Coordinate::new(0, 50)]);
        assert!(!built.should_try);
        assert_eq!(ids(&built, NORTH), vec![NORTH, 2]);
        assert_eq!(ids(&built, SOUTH), vec![SOUTH, 2]);
        assert_eq!(ids(&built, 2), vec![2, NORTH, SOUTH]);
    }

    #[test]
    fn test_exact_radius_is_not_a_jump() {
        let floes = [Coordinate::new(0, 30), Coordinate::new(0, 70)];
        let built = build_graph(0, 100, 40, &floes);
        assert!(built.should_try);
        assert_eq!(ids(&built, NORTH), vec![NORTH, 2]);
        assert_eq!(ids(&built, SOUTH), vec![SOUTH, 3]);
        assert_eq!(ids(&built, 2), vec![2, NORTH]);
        assert_eq!(ids(&built, 3), vec![3, SOUTH]);
        assert_eq!(built.graph.merge_count(), 2);
    }

    #[test]
    fn test_connected_chain_order() {
        let floes = [Coordinate::new(0, 30), Coordinate::new(0, 65)];
        let built = build_graph(0, 100, 40, &floes);
        assert_eq!(ids(&built, NORTH), vec![NORTH, 2]);
        assert_eq!(ids(&built, SOUTH), vec![SOUTH, 3]);
        assert_eq!(ids(&built, 2), vec![2, NORTH, 3]);
        assert_eq!(ids(&built, 3), vec![3, SOUTH, 2]);
        assert_eq!(built.graph.merge_count(), 3);
    }

    #[test]
    fn test_pole_distance_ignores_floe_x() {
        // far away horizontally, but only the y difference counts for poles
        let built = build_graph(0, 100, 10, &[Coordinate::new(5000, 5)]);
        assert_eq!(ids(&built, NORTH), vec![NORTH, 2]);
    }

    #[test]
    fn test_chain_coordinates() {
        let floes = [Coordinate::new(1, 2), Coordinate::new(3, 4)];
        let built = build_graph(0, 1000, 10, &floes);
        let in_first: Vec<_> = built.graph.chain(2).map(|n| n.coordinate).collect();
        assert_eq!(
            in_first,
            vec![Coordinate::new(1, 2), Coordinate::pole(0), Coordinate::new(3, 4)]
        );
        let in_second: Vec<_> = built.graph.chain(3).map(|n| n.coordinate).collect();
        assert_eq!(
            in_second,
            vec![Coordinate::new(3, 4), Coordinate::pole(0), Coordinate::new(1, 2)]
        );
    }
}
