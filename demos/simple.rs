use maze_pathfinding::{build_wall_model, new_search, Point, Wall};

// In this example a path is found on a 3x3 field with shape
//  ___
// |S|  |
// | |  |
// |   E|
//  ___
// where
// - | marks a wall between two cells
// - S marks the start
// - E marks the end
//
// The robot moves between cell centres with four neighbours

fn main() {
    let walls = build_wall_model(3, [Wall::vertical(1, 0), Wall::vertical(1, 1)]);
    let mut search = new_search(Point::new(0.0, 0.0), Point::new(2.0, 2.0), walls);
    match search.run() {
        Ok(path) => {
            println!("Path:");
            for p in path {
                println!("{}", p);
            }
            if let Some(directions) = search.directions() {
                let labels = directions.iter().map(|m| m.label()).collect::<String>();
                println!("Moves: {labels}");
            }
        }
        Err(e) => println!("{e}"),
    }
    println!("{:?}", search.stats());
}
