use maze_pathfinding::observation::load_walls;
use maze_pathfinding::{new_search, Point};
use std::env;
use std::process::ExitCode;

// Plans a route through a maze definition file on the standard 11x11 field.
//
//     cargo run --example maze_file -- demos/data/divider.maze 0 0 10 0

fn main() -> ExitCode {
    let args = env::args().skip(1).collect::<Vec<_>>();
    let [file, coords @ ..] = args.as_slice() else {
        eprintln!("usage: maze_file <maze> <start x> <start y> <goal x> <goal y>");
        return ExitCode::FAILURE;
    };
    let coords = coords
        .iter()
        .map(|c| c.parse::<f64>())
        .collect::<Result<Vec<_>, _>>();
    let (start, goal) = match coords.as_deref() {
        Ok([sx, sy, gx, gy]) => (Point::new(*sx, *sy), Point::new(*gx, *gy)),
        _ => {
            eprintln!("expected four numeric coordinates");
            return ExitCode::FAILURE;
        }
    };
    let walls = match load_walls(file) {
        Ok(walls) => walls,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let mut search = new_search(start, goal, walls);
    match search.run() {
        Ok(_) => {
            println!("{search}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
