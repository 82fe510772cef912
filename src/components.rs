use crate::robot::Move;
use crate::walls::WallModel;
use grid_util::point::Point as Cell;
use log::info;
use petgraph::unionfind::UnionFind;

/// [Connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) of the cells of
/// a square field, where two neighbouring cells are connected when the edge between them is not a
/// wall. Used to reject unreachable goals before flood-filling the whole field.
#[derive(Clone, Debug)]
pub struct Components {
    size: usize,
    components: UnionFind<usize>,
}

impl Components {
    /// Links up every pair of adjacent cells in the `size` x `size` field that are not separated by
    /// a wall.
    pub fn new(walls: &WallModel, size: usize) -> Components {
        info!("Generating connected components for a {size}x{size} field");
        let mut components = UnionFind::new(size * size);
        for x in 0..size as i32 {
            for y in 0..size as i32 {
                let cell = Cell::new(x, y);
                let parent_ix = ix(size, x, y);
                // Right and Down cover every interior edge exactly once.
                for m in [Move::Right, Move::Down] {
                    let (dx, dy) = m.delta();
                    let (nx, ny) = (x + dx, y + dy);
                    if in_bounds(size, nx, ny) && !m.is_blocked(cell, walls) {
                        components.union(parent_ix, ix(size, nx, ny));
                    }
                }
            }
        }
        Components { size, components }
    }

    /// Components of the field recorded in the wall model, if it has a known size.
    pub fn from_walls(walls: &WallModel) -> Option<Components> {
        walls.field_size().map(|size| Components::new(walls, size))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        in_bounds(self.size, cell.x, cell.y)
    }

    /// Retrieves the component id a given cell belongs to.
    pub fn get_component(&self, cell: &Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| self.components.find(ix(self.size, cell.x, cell.y)))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are on different components. Cells outside the field are never
    /// reachable from this component map's point of view; see [contains](Self::contains).
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        if self.contains(start) && self.contains(goal) {
            !self.components.equiv(
                ix(self.size, start.x, start.y),
                ix(self.size, goal.x, goal.y),
            )
        } else {
            true
        }
    }
}

fn in_bounds(size: usize, x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && (x as usize) < size && (y as usize) < size
}

fn ix(size: usize, x: i32, y: i32) -> usize {
    y as usize * size + x as usize
}
