use crate::geometry::Point;
use crate::walls::{Wall, WallModel};
use core::fmt;
use grid_util::point::Point as Cell;
use smallvec::SmallVec;

/// Legal moves at a cell. At most four, so they never touch the heap.
pub type MoveSet = SmallVec<[Move; 4]>;

/// One of the four cardinal unit moves. The y axis points down, so [Move::Down] increases y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Down,
    Right,
    Up,
    Left,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Down, Move::Right, Move::Up, Move::Left];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Move::Down => (0, 1),
            Move::Right => (1, 0),
            Move::Up => (0, -1),
            Move::Left => (-1, 0),
        }
    }

    pub const fn inverse(self) -> Move {
        match self {
            Move::Down => Move::Up,
            Move::Right => Move::Left,
            Move::Up => Move::Down,
            Move::Left => Move::Right,
        }
    }

    /// The edge of `cell` that this move crosses. [None] if that edge does not fit on the `i32`
    /// lattice, in which case no wall can block the move.
    pub fn blocking_edge(self, cell: Cell) -> Option<Wall> {
        let (x, y) = (cell.x, cell.y);
        Some(match self {
            Move::Down => {
                let y = y.checked_add(1)?;
                Wall { x1: x, y1: y, x2: x.checked_add(1)?, y2: y }
            }
            Move::Right => {
                let x = x.checked_add(1)?;
                Wall { x1: x, y1: y, x2: x, y2: y.checked_add(1)? }
            }
            Move::Up => Wall { x1: x, y1: y, x2: x.checked_add(1)?, y2: y },
            Move::Left => Wall { x1: x, y1: y, x2: x, y2: y.checked_add(1)? },
        })
    }

    /// True if a wall in `walls` stops this move out of `cell`.
    pub fn is_blocked(self, cell: Cell, walls: &WallModel) -> bool {
        self.blocking_edge(cell).is_some_and(|edge| walls.contains(&edge))
    }

    pub const fn label(self) -> char {
        match self {
            Move::Down => 'D',
            Move::Right => 'R',
            Move::Up => 'U',
            Move::Left => 'L',
        }
    }

    /// The move taking `from` to `to`, if the two are exactly one unit step apart.
    pub fn between(from: &Point, to: &Point) -> Option<Move> {
        Move::ALL
            .into_iter()
            .find(|m| from.offset(m.delta().0, m.delta().1) == *to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Moves available from `cell`: every direction whose blocking edge is not a wall. Callers must
/// not depend on the order of the result.
pub fn legal_moves(cell: Cell, walls: &WallModel) -> MoveSet {
    Move::ALL
        .into_iter()
        .filter(|m| !m.is_blocked(cell, walls))
        .collect()
}

/// The point robot. Its position is the only mutable coordinate in the planner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Robot {
    position: Point,
}

impl Robot {
    pub fn new(x: f64, y: f64) -> Robot {
        Robot {
            position: Point::new(x, y),
        }
    }
    pub fn position(&self) -> Point {
        self.position
    }
    /// The integer cell the robot is in, if it lies on the wall lattice.
    pub fn cell(&self) -> Option<Cell> {
        self.position.cell()
    }
    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }
    /// Displaces the robot by one unit. Does not consult any walls.
    pub fn step(&mut self, m: Move) {
        let (dx, dy) = m.delta();
        self.position = self.position.offset(dx, dy);
    }
    /// Off the wall lattice no edge can be a wall, so every move is legal there.
    pub fn legal_moves(&self, walls: &WallModel) -> MoveSet {
        match self.cell() {
            Some(cell) => legal_moves(cell, walls),
            None => Move::ALL.into_iter().collect(),
        }
    }
}

impl From<Point> for Robot {
    fn from(position: Point) -> Robot {
        Robot { position }
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "robot pos: {}", self.position)
    }
}
