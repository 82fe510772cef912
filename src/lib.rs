//! # maze_pathfinding
//!
//! Plans a shortest route for a point robot on a unit grid whose obstacles are walls placed on
//! the edges between cells rather than blocked cells. The robot moves up, down, left or right
//! from cell centre to cell centre; a move is legal when the edge it crosses is not a wall.
//!
//! Planning is [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic, which is
//! consistent for uniform-cost 4-connected movement, so the returned path is a shortest one.
//! On a bounded field the
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) are checked
//! first to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use maze_pathfinding::{build_wall_model, new_search, Point, Wall};
//!
//! let walls = build_wall_model(2, [Wall::vertical(1, 0)]);
//! let mut search = new_search(Point::new(0.0, 0.0), Point::new(1.0, 0.0), walls);
//! let path = search.run().unwrap();
//! assert_eq!(path.len(), 3);
//! ```
pub mod components;
pub mod error;
pub mod geometry;
pub mod maze;
pub mod observation;
pub mod robot;
pub mod search;
pub mod state;
pub mod walls;

use fxhash::FxBuildHasher;
use indexmap::IndexSet;

pub use crate::error::{ParseError, SearchError, WallError};
pub use crate::geometry::{euclidean, manhattan, Point};
pub use crate::maze::{MazeSnapshot, StateKey};
pub use crate::robot::{Move, Robot};
pub use crate::search::{DuplicatePolicy, SearchConfig, SearchEngine, SearchStats, SearchStatus};
pub use crate::state::SearchState;
pub use crate::walls::{build_wall_model, Wall, WallModel};

pub(crate) type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Side length of the field described by maze definition files.
pub const DEFAULT_FIELD_SIZE: usize = 11;

/// Sets up a search from `start` to `goal` with the default [SearchConfig]. Both points are
/// moved onto the centre of the cell that contains them.
pub fn new_search(start: Point, goal: Point, walls: WallModel) -> SearchEngine {
    SearchEngine::new(MazeSnapshot::new(start, goal, walls))
}
