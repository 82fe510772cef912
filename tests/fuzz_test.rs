//! Fuzzes the planner by checking on many random walled fields that a path is found exactly when
//! the goal is on the start's connected component, that every returned path is legal, and that
//! its length matches a plain Dijkstra over the cell graph. Both duplicate policies are tested.
use grid_util::point::Point as Cell;
use maze_pathfinding::components::Components;
use maze_pathfinding::{
    build_wall_model, DuplicatePolicy, MazeSnapshot, Move, Point, SearchConfig, SearchEngine,
    Wall, WallModel,
};
use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};
use rand::prelude::*;

fn random_walls(n: i32, rng: &mut StdRng, density: f64) -> WallModel {
    let mut interior = Vec::new();
    for x in 0..n {
        for y in 1..n {
            if rng.gen_bool(density) {
                interior.push(Wall::horizontal(x, y));
            }
        }
    }
    for x in 1..n {
        for y in 0..n {
            if rng.gen_bool(density) {
                interior.push(Wall::vertical(x, y));
            }
        }
    }
    build_wall_model(n as usize, interior)
}

fn random_cell(n: i32, rng: &mut StdRng) -> Point {
    Point::new(rng.gen_range(0..n) as f64, rng.gen_range(0..n) as f64)
}

/// Shortest move count between two cells, or [None] if they are not connected.
fn baseline_distance(walls: &WallModel, n: i32, start: &Point, goal: &Point) -> Option<usize> {
    let ix = |x: i32, y: i32| NodeIndex::new((y * n + x) as usize);
    let mut graph: UnGraph<(), ()> = UnGraph::default();
    for _ in 0..n * n {
        graph.add_node(());
    }
    for x in 0..n {
        for y in 0..n {
            let cell = Cell::new(x, y);
            if x + 1 < n && !Move::Right.is_blocked(cell, walls) {
                graph.add_edge(ix(x, y), ix(x + 1, y), ());
            }
            if y + 1 < n && !Move::Down.is_blocked(cell, walls) {
                graph.add_edge(ix(x, y), ix(x, y + 1), ());
            }
        }
    }
    let goal_ix = ix(goal.x as i32, goal.y as i32);
    let costs = dijkstra(&graph, ix(start.x as i32, start.y as i32), Some(goal_ix), |_| 1usize);
    costs.get(&goal_ix).copied()
}

fn visualize_walls(walls: &WallModel, n: i32, start: &Point, goal: &Point) {
    for y in 0..n {
        let mut top = String::new();
        let mut row = String::new();
        for x in 0..n {
            let cell = Cell::new(x, y);
            top.push('+');
            top.push(if Move::Up.is_blocked(cell, walls) { '-' } else { ' ' });
            row.push(if Move::Left.is_blocked(cell, walls) { '|' } else { ' ' });
            row.push(if start.cell() == Some(cell) {
                'S'
            } else if goal.cell() == Some(cell) {
                'G'
            } else {
                '.'
            });
        }
        println!("{top}+");
        println!("{row}|");
    }
}

fn assert_legal(walls: &WallModel, start: &Point, goal: &Point, path: &[Point]) {
    let mut current = start.cell_center();
    for target in path {
        let m = Move::between(&current, target).expect("path steps are unit moves");
        assert!(!m.is_blocked(current.cell().unwrap(), walls));
        current = *target;
    }
    assert_eq!(current, goal.cell_center());
}

#[test]
fn fuzz() {
    const N: i32 = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for duplicate_policy in [
        DuplicatePolicy::SkipVisitedSuccessors,
        DuplicatePolicy::LazyDeletion,
    ] {
        for _ in 0..N_GRIDS {
            let walls = random_walls(N, &mut rng, 0.35);
            let start = random_cell(N, &mut rng);
            let goal = random_cell(N, &mut rng);
            let components = Components::new(&walls, N as usize);
            let reachable = components.reachable(&start.cell().unwrap(), &goal.cell().unwrap());
            let expected = baseline_distance(&walls, N, &start, &goal);
            assert_eq!(reachable, expected.is_some());

            let config = SearchConfig {
                duplicate_policy,
                // Exhaust the frontier instead of relying on the component check.
                prune_unreachable: false,
                ..Default::default()
            };
            let mut search =
                SearchEngine::with_config(MazeSnapshot::new(start, goal, walls.clone()), config);
            let result = search.run();
            // Show the field if the outcome is wrong
            if result.as_ref().ok().map(Vec::len) != expected {
                visualize_walls(&walls, N, &start, &goal);
            }
            assert_eq!(result.as_ref().ok().map(Vec::len), expected);
            if let Ok(path) = result {
                assert_legal(&walls, &start, &goal, &path);
            }
        }
    }
}

/// A heavier heuristic weight may lose optimality but must never lose completeness.
#[test]
fn fuzz_heuristic_factor() {
    const N: i32 = 6;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let walls = random_walls(N, &mut rng, 0.4);
        let start = random_cell(N, &mut rng);
        let goal = random_cell(N, &mut rng);
        let expected = baseline_distance(&walls, N, &start, &goal);
        let config = SearchConfig {
            heuristic_factor: 3.0,
            ..Default::default()
        };
        let mut search =
            SearchEngine::with_config(MazeSnapshot::new(start, goal, walls.clone()), config);
        match (search.run(), expected) {
            (Ok(path), Some(distance)) => {
                assert!(path.len() >= distance);
                assert_legal(&walls, &start, &goal, &path);
            }
            (Err(_), None) => {}
            (result, expected) => {
                visualize_walls(&walls, N, &start, &goal);
                panic!("search gave {result:?}, baseline gave {expected:?}");
            }
        }
    }
}
