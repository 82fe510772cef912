use crate::error::WallError;
use crate::FxIndexSet;
use core::fmt;

/// A blocked unit edge between two adjacent lattice corners. The endpoints are kept in
/// ascending order so that an edge has exactly one representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Wall {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Wall {
    /// Creates the edge between `(x1, y1)` and `(x2, y2)`, which must be axis-aligned and of unit
    /// length. The endpoints may be given in either order.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Wall, WallError> {
        if !matches!((x1.abs_diff(x2), y1.abs_diff(y2)), (1, 0) | (0, 1)) {
            return Err(WallError::NotUnitEdge { x1, y1, x2, y2 });
        }
        if (x1, y1) <= (x2, y2) {
            Ok(Wall { x1, y1, x2, y2 })
        } else {
            Ok(Wall {
                x1: x2,
                y1: y2,
                x2: x1,
                y2: y1,
            })
        }
    }
    /// The edge from `(x, y)` to `(x + 1, y)`.
    pub const fn horizontal(x: i32, y: i32) -> Wall {
        Wall {
            x1: x,
            y1: y,
            x2: x + 1,
            y2: y,
        }
    }
    /// The edge from `(x, y)` to `(x, y + 1)`.
    pub const fn vertical(x: i32, y: i32) -> Wall {
        Wall {
            x1: x,
            y1: y,
            x2: x,
            y2: y + 1,
        }
    }
    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})-({},{})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// The set of blocked edges. Walls can be added but never removed, so the model only grows over
/// its lifetime. When built with [WallModel::with_boundary] it also remembers the size of the
/// square field it encloses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WallModel {
    walls: FxIndexSet<Wall>,
    field_size: Option<usize>,
}

impl WallModel {
    /// An empty, unbounded wall model.
    pub fn new() -> WallModel {
        WallModel::default()
    }

    /// The outer walls of a `size` x `size` field, covering cells `0..size` on both axes.
    pub fn with_boundary(size: usize) -> WallModel {
        let n = size as i32;
        let mut model = WallModel {
            walls: FxIndexSet::default(),
            field_size: Some(size),
        };
        for i in 0..n {
            model.insert(Wall::horizontal(i, 0));
            model.insert(Wall::horizontal(i, n));
            model.insert(Wall::vertical(0, i));
            model.insert(Wall::vertical(n, i));
        }
        model
    }

    /// Adds a wall, returning `false` if it was already present.
    pub fn insert(&mut self, wall: Wall) -> bool {
        self.walls.insert(wall)
    }

    pub fn contains(&self, wall: &Wall) -> bool {
        self.walls.contains(wall)
    }

    /// Merges two wall models. Shared edges collapse and the larger known field size is kept.
    pub fn union(&self, other: &WallModel) -> WallModel {
        let mut merged = self.clone();
        merged.extend(other.iter().copied());
        merged.field_size = match (self.field_size, other.field_size) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        merged
    }

    pub fn field_size(&self) -> Option<usize> {
        self.field_size
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Iterates over the walls in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter()
    }
}

impl Extend<Wall> for WallModel {
    fn extend<I: IntoIterator<Item = Wall>>(&mut self, iter: I) {
        self.walls.extend(iter)
    }
}

impl FromIterator<Wall> for WallModel {
    fn from_iter<I: IntoIterator<Item = Wall>>(iter: I) -> WallModel {
        WallModel {
            walls: iter.into_iter().collect(),
            field_size: None,
        }
    }
}

/// The boundary of a `boundary_size` field plus the given edges, typically read from a maze
/// definition.
pub fn build_wall_model<I>(boundary_size: usize, extra_edges: I) -> WallModel
where
    I: IntoIterator<Item = Wall>,
{
    let mut model = WallModel::with_boundary(boundary_size);
    model.extend(extra_edges);
    model
}
