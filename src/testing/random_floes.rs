use crate::{Coordinate, Puzzle};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// `n` floes with both coordinates in `0..extent`.
#[allow(dead_code)]
pub fn random_floes(n: usize, extent: i32, seed: usize) -> Vec<Coordinate> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    (0..n)
        .map(|_| Coordinate::new(rng.random_range(0..extent), rng.random_range(0..extent)))
        .collect()
}

/// Random puzzle with the north pole at `0` and the south pole at `extent`.
#[allow(dead_code)]
pub fn random_puzzle(n: usize, extent: i32, radius: i32, seed: usize) -> Puzzle {
    Puzzle::new(0, extent, radius, random_floes(n, extent, seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_floes() {
        assert_eq!(random_floes(10, 100, 7), random_floes(10, 100, 7));
        assert!(
            random_floes(10, 100, 7)
                .iter()
                .all(|c| (0..100).contains(&c.x) && (0..100).contains(&c.y))
        );
    }
}
