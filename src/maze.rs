use crate::geometry::Point;
use crate::robot::{Move, MoveSet, Robot};
use crate::walls::WallModel;
use core::fmt;
use log::debug;
use std::sync::Arc;

/// Identity of a search node for duplicate detection: the centre of the cell the robot is in
/// and the goal cell centre. Walls, history and cost are not part of it. Centres are compared by
/// their bit patterns, which is exact because every centre is produced by the same rounding.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    position: [u64; 2],
    goal: [u64; 2],
}

impl StateKey {
    pub fn new(position: Point, goal: Point) -> StateKey {
        let bits = |p: Point| {
            let p = p.cell_center();
            [p.x.to_bits(), p.y.to_bits()]
        };
        StateKey {
            position: bits(position),
            goal: bits(goal),
        }
    }
    pub fn position(&self) -> Point {
        Point::new(f64::from_bits(self.position[0]), f64::from_bits(self.position[1]))
    }
    pub fn goal(&self) -> Point {
        Point::new(f64::from_bits(self.goal[0]), f64::from_bits(self.goal[1]))
    }
}

impl fmt::Debug for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("StateKey")
            .field("position", &self.position())
            .field("goal", &self.goal())
            .finish()
    }
}

/// The robot, its goal and the known walls at one point of the search. Snapshots are values:
/// [step](Self::step) produces a new snapshot and leaves the original untouched. The wall model
/// is shared between all snapshots of a search.
#[derive(Clone, Debug)]
pub struct MazeSnapshot {
    robot: Robot,
    goal: Point,
    walls: Arc<WallModel>,
    h: f64,
}

impl MazeSnapshot {
    /// Creates a snapshot. The goal is moved onto the centre of its cell so it can be compared
    /// with a robot that walks from cell centre to cell centre.
    pub fn new(robot: Point, goal: Point, walls: WallModel) -> MazeSnapshot {
        MazeSnapshot::with_shared_walls(robot, goal, Arc::new(walls))
    }

    pub fn with_shared_walls(robot: Point, goal: Point, walls: Arc<WallModel>) -> MazeSnapshot {
        let goal = goal.cell_center();
        MazeSnapshot {
            robot: Robot::from(robot),
            goal,
            walls,
            h: robot.manhattan_distance(&goal),
        }
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn robot_position(&self) -> Point {
        self.robot.position()
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn walls(&self) -> &WallModel {
        &self.walls
    }

    /// Manhattan distance from the robot to the goal, computed when the snapshot was made.
    pub fn heuristic(&self) -> f64 {
        self.h
    }

    /// True iff the robot stands exactly on the goal.
    pub fn at_goal(&self) -> bool {
        self.robot.position() == self.goal
    }

    /// The snapshot after moving the robot one unit in direction `m`. Walls are not consulted;
    /// use [legal_moves](Self::legal_moves) to pick `m`.
    pub fn step(&self, m: Move) -> MazeSnapshot {
        let mut robot = self.robot;
        robot.step(m);
        MazeSnapshot {
            robot,
            goal: self.goal,
            walls: Arc::clone(&self.walls),
            h: robot.position().manhattan_distance(&self.goal),
        }
    }

    /// The same snapshot with the robot moved onto the centre of its current cell.
    pub fn recentered(&self) -> MazeSnapshot {
        MazeSnapshot::with_shared_walls(
            self.robot.position().cell_center(),
            self.goal,
            Arc::clone(&self.walls),
        )
    }

    pub fn legal_moves(&self) -> MoveSet {
        self.robot.legal_moves(&self.walls)
    }

    /// Merges newly observed walls into the model. Existing walls are never removed.
    pub fn update_walls(&mut self, new_walls: &WallModel) {
        let before = self.walls.len();
        self.walls = Arc::new(self.walls.union(new_walls));
        debug!(
            "Wall update added {} of {} walls",
            self.walls.len() - before,
            new_walls.len()
        );
    }

    pub fn key(&self) -> StateKey {
        StateKey::new(self.robot.position(), self.goal)
    }
}

impl fmt::Display for MazeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}, goal: {}, walls: {}",
            self.robot,
            self.goal,
            self.walls.len()
        )
    }
}
