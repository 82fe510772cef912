use maze_pathfinding::observation::{load_walls, observed_walls};
use maze_pathfinding::{
    build_wall_model, new_search, MazeSnapshot, Move, Point, SearchEngine, SearchError,
    SearchStatus, Wall, WallModel, DEFAULT_FIELD_SIZE,
};
use std::path::Path;

fn divider_maze() -> WallModel {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/data/divider.maze");
    load_walls(path).unwrap()
}

#[test]
fn two_by_two_field() {
    let mut search = new_search(
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        WallModel::with_boundary(2),
    );
    let path = search.run().unwrap();
    assert_eq!(path.len(), 2);
    let directions = search.directions().unwrap();
    assert!(
        directions == [Move::Right, Move::Down] || directions == [Move::Down, Move::Right],
        "{directions:?}"
    );
}

#[test]
fn walled_off_goal() {
    let walls = build_wall_model(
        DEFAULT_FIELD_SIZE,
        [
            Wall::horizontal(7, 7),
            Wall::horizontal(7, 8),
            Wall::vertical(7, 7),
            Wall::vertical(8, 7),
        ],
    );
    let mut search = new_search(Point::new(1.0, 1.0), Point::new(7.0, 7.0), walls);
    assert_eq!(search.run(), Err(SearchError::NotFound));
    assert_eq!(search.status(), SearchStatus::Failed);
}

#[test]
fn start_is_goal() {
    for walls in [WallModel::new(), WallModel::with_boundary(DEFAULT_FIELD_SIZE)] {
        let mut search = new_search(Point::new(4.0, 6.0), Point::new(4.0, 6.0), walls);
        assert_eq!(search.run(), Ok(vec![]));
        assert_eq!(search.solution().unwrap().path_cost(), 0);
    }
}

/// Without any walls the field is unbounded, but a reachable goal still terminates the search.
#[test]
fn unbounded_field() {
    let mut search = new_search(Point::new(-3.0, 2.0), Point::new(4.0, -1.0), WallModel::new());
    let path = search.run().unwrap();
    assert_eq!(path.len(), 10);
    assert_eq!(*path.last().unwrap(), Point::new(4.5, -0.5));
}

#[test]
fn maze_file() {
    let walls = divider_maze();
    assert_eq!(walls.len(), 44 + 10);
    let mut search = new_search(Point::new(0.0, 0.0), Point::new(10.0, 0.0), walls);
    let path = search.run().unwrap();
    assert_eq!(path.len(), 30);
    // The only way across the divider is along the bottom row.
    assert!(path.contains(&Point::new(5.5, 10.5)));
}

#[test]
fn missing_maze_file() {
    assert!(load_walls("does/not/exist.maze").is_err());
}

/// Walls reported while driving are merged into the snapshot and the next plan respects them.
#[test]
fn replan_with_observed_walls() {
    let mut maze = MazeSnapshot::new(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        WallModel::with_boundary(DEFAULT_FIELD_SIZE),
    );
    let mut search = SearchEngine::new(maze.clone());
    assert_eq!(search.run().unwrap().len(), 10);

    let report = (0..10)
        .map(|y| format!("wall 5 {} 5 {}", y, y + 1))
        .collect::<Vec<_>>();
    maze.update_walls(&observed_walls(report.iter().map(String::as_str)));
    assert_eq!(maze.walls(), &divider_maze());
    let mut search = SearchEngine::new(maze);
    assert_eq!(search.run().unwrap().len(), 30);
}

/// Planning works the same far from the origin and off the wall lattice.
#[test]
fn far_from_origin() {
    let (start, goal) = (Point::new(3e9, 0.0), Point::new(3e9 + 2.0, 0.0));
    let mut search = new_search(start, goal, WallModel::new());
    assert_eq!(search.run().unwrap().len(), 2);
    assert_eq!(search.directions().unwrap(), vec![Move::Right, Move::Right]);
}

/// Start and goal both left of a bounded field: the component check must not reject the goal.
#[test]
fn outside_bounded_field() {
    let (start, goal) = (Point::new(-5.0, 0.0), Point::new(-3.0, 0.0));
    let mut search = new_search(start, goal, WallModel::with_boundary(3));
    assert_eq!(search.run().unwrap().len(), 2);
}
