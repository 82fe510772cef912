//! Real-valued positions and the two distance measures used by the planner.
use core::fmt;
use grid_util::point::Point as Cell;
use num_traits::Float;

/// Straight-line distance between `(xi, yi)` and `(xf, yf)`.
pub fn euclidean<T: Float>(xi: T, yi: T, xf: T, yf: T) -> T {
    ((xi - xf).powi(2) + (yi - yf).powi(2)).sqrt()
}

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between `(xi, yi)` and
/// `(xf, yf)`. Admissible for 4-connected unit-cost movement.
pub fn manhattan<T: Float>(xi: T, yi: T, xf: T, yf: T) -> T {
    (xi - xf).abs() + (yi - yf).abs()
}

/// A position on the field. The robot moves between cell centres such as `(2.5, 3.5)`, walls
/// live on the integer lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
    /// Centre of the given integer cell.
    pub fn from_cell(cell: Cell) -> Point {
        Point::new(cell.x as f64 + 0.5, cell.y as f64 + 0.5)
    }
    /// The integer cell containing this point, identified by its lower-left corner. [None] if
    /// the cell lies outside the `i32` lattice the walls are defined on.
    pub fn cell(&self) -> Option<Cell> {
        let (x, y) = (self.x.floor(), self.y.floor());
        let lattice = i32::MIN as f64..=i32::MAX as f64;
        (lattice.contains(&x) && lattice.contains(&y)).then(|| Cell::new(x as i32, y as i32))
    }
    /// Moves the point onto the centre of the cell containing it.
    pub fn cell_center(&self) -> Point {
        Point::new(self.x.floor() + 0.5, self.y.floor() + 0.5)
    }
    pub fn is_cell_center(&self) -> bool {
        *self == self.cell_center()
    }
    pub fn euclidean_distance(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }
    pub fn manhattan_distance(&self, other: &Point) -> f64 {
        manhattan(self.x, self.y, other.x, other.y)
    }
    pub(crate) fn offset(&self, dx: i32, dy: i32) -> Point {
        Point::new(self.x + dx as f64, self.y + dy as f64)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
