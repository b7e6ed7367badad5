/// Index of a component in the [`ComponentGraph`](crate::ComponentGraph).
///
/// Ids `0` and `1` belong to the poles, every other id names exactly one floe.
pub type ComponentId = usize;

/// Component id of the north pole.
pub const NORTH: ComponentId = 0;
/// Component id of the south pole.
pub const SOUTH: ComponentId = 1;
/// Number of reserved pole ids, floes are numbered from here.
pub const POLES: usize = 2;

/// A point on the ice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// Location of a pole, poles always sit on `x = 0`.
    pub fn pole(y: i32) -> Self {
        Coordinate { x: 0, y }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {}; y: {}", self.x, self.y)
    }
}

/// Visitation state of a component during DFS.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Colour {
    #[default]
    Unvisited,
    InProgress,
    Done,
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colour::Unvisited => write!(f, "Unvisited"),
            Colour::InProgress => write!(f, "InProgress"),
            Colour::Done => write!(f, "Done"),
        }
    }
}

/// Parsed puzzle: both poles, the jump radius and the floes in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub north_y: i32,
    pub south_y: i32,
    pub radius: i32,
    pub floes: Vec<Coordinate>,
}

impl Puzzle {
    pub fn new(north_y: i32, south_y: i32, radius: i32, floes: Vec<Coordinate>) -> Self {
        Puzzle {
            north_y,
            south_y,
            radius,
            floes,
        }
    }
}
