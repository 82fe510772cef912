use crate::geometry::Point;
use crate::maze::{MazeSnapshot, StateKey};
use crate::robot::Move;
use smallvec::SmallVec;

/// Successors of a state. A cell has at most four exits.
pub type Successors = SmallVec<[SearchState; 4]>;

/// A node of the search tree: a maze snapshot together with the moves that led to it.
///
/// [SearchState] intentionally has no [PartialEq] or [Hash](std::hash::Hash) implementation.
/// Duplicate detection goes through [key](Self::key), which only looks at robot position and
/// goal.
#[derive(Clone, Debug)]
pub struct SearchState {
    maze: MazeSnapshot,
    moves: Vec<Point>,
    path_cost: u32,
}

impl SearchState {
    pub fn new(maze: MazeSnapshot, moves: Vec<Point>, path_cost: u32) -> SearchState {
        SearchState {
            maze,
            moves,
            path_cost,
        }
    }

    /// A root state with no history.
    pub fn initial(maze: MazeSnapshot) -> SearchState {
        SearchState::new(maze, Vec::new(), 0)
    }

    pub fn maze(&self) -> &MazeSnapshot {
        &self.maze
    }

    /// The target coordinate of every move taken so far, in order.
    pub fn moves(&self) -> &[Point] {
        &self.moves
    }

    pub fn into_moves(self) -> Vec<Point> {
        self.moves
    }

    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    /// Manhattan distance to the goal, as cached on the snapshot.
    pub fn heuristic(&self) -> f64 {
        self.maze.heuristic()
    }

    /// Path cost plus Manhattan distance to the goal.
    pub fn eval(&self) -> f64 {
        self.path_cost as f64 + self.heuristic()
    }

    pub fn at_goal(&self) -> bool {
        self.maze.at_goal()
    }

    pub fn key(&self) -> StateKey {
        self.maze.key()
    }

    /// The state reached by taking move `m`, one unit more expensive than this one.
    pub fn step(&self, m: Move) -> SearchState {
        let maze = self.maze.step(m);
        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(maze.robot_position());
        SearchState::new(maze, moves, self.path_cost + 1)
    }

    /// One successor per legal move. No order is guaranteed.
    pub fn successors(&self) -> Successors {
        self.maze
            .legal_moves()
            .into_iter()
            .map(|m| self.step(m))
            .collect()
    }
}

/// Recovers the direction labels of a history of move targets starting at `start`. Returns
/// [None] if two consecutive points are not one unit step apart.
pub fn directions(start: Point, targets: &[Point]) -> Option<Vec<Move>> {
    let mut current = start;
    targets
        .iter()
        .map(|target| {
            let m = Move::between(&current, target);
            current = *target;
            m
        })
        .collect()
}
