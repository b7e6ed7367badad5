use crate::Coordinate;

/// Euclidean distance between two points.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    (squared_distance(a, b) as f64).sqrt()
}

/// Distance from a point to a pole at height `pole_y`.
///
/// Only the `y` difference counts, the point's `x` is ignored.
pub fn pole_distance(a: Coordinate, pole_y: i32) -> f64 {
    (i64::from(a.y) - i64::from(pole_y)).abs() as f64
}

// i128: a squared i32 difference alone can exceed i64
fn squared_distance(a: Coordinate, b: Coordinate) -> i128 {
    let dx = i128::from(a.x) - i128::from(b.x);
    let dy = i128::from(a.y) - i128::from(b.y);
    dx * dx + dy * dy
}

/// Returns true if `a` and `b` are strictly closer than `radius`.
///
/// Same answer as `distance(a, b) < radius`, but computed on squared integers
/// so a distance exactly equal to the radius is never accepted.
pub fn within_jump(a: Coordinate, b: Coordinate, radius: i32) -> bool {
    if radius <= 0 {
        return false;
    }
    let r = i128::from(radius);
    squared_distance(a, b) < r * r
}

/// Pole version of [`within_jump`], see [`pole_distance`].
pub fn pole_within_jump(a: Coordinate, pole_y: i32, radius: i32) -> bool {
    (i64::from(a.y) - i64::from(pole_y)).abs() < i64::from(radius)
}
