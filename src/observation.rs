//! Input handed to the planner from outside: maze definition files, one wall per line, and the
//! observation lines a running robot reports. Nothing in the search depends on this module.
use crate::error::ParseError;
use crate::walls::{build_wall_model, Wall, WallModel};
use crate::DEFAULT_FIELD_SIZE;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Splits `tag x1 y1 x2 y2` into its coordinates. The tag is exactly four word characters and
/// the coordinates are non-negative integers.
pub fn parse_wall_line(line: &str) -> Option<(i32, i32, i32, i32)> {
    let mut tokens = line.split_whitespace();
    let tag = tokens.next()?;
    if tag.chars().count() != 4 || !tag.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }
    let mut coord = || tokens.next()?.parse::<u16>().ok().map(i32::from);
    let edge = (coord()?, coord()?, coord()?, coord()?);
    match tokens.next() {
        Some(_) => None,
        None => Some(edge),
    }
}

/// Reads one wall per line. Blank lines are skipped.
pub fn parse_walls<R: BufRead>(reader: R) -> Result<Vec<Wall>, ParseError> {
    let mut walls = Vec::new();
    for (ix, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (x1, y1, x2, y2) = parse_wall_line(&line).ok_or_else(|| ParseError::Malformed {
            line: ix + 1,
            content: line.clone(),
        })?;
        let wall = Wall::new(x1, y1, x2, y2).map_err(|source| ParseError::Wall {
            line: ix + 1,
            source,
        })?;
        walls.push(wall);
    }
    Ok(walls)
}

/// The boundary of a `boundary_size` field plus every wall read from `reader`.
pub fn read_wall_model<R: BufRead>(
    reader: R,
    boundary_size: usize,
) -> Result<WallModel, ParseError> {
    Ok(build_wall_model(boundary_size, parse_walls(reader)?))
}

/// Loads a maze definition file for the default 11x11 field.
pub fn load_walls<P: AsRef<Path>>(path: P) -> Result<WallModel, ParseError> {
    let file = File::open(path.as_ref())?;
    let walls = read_wall_model(BufReader::new(file), DEFAULT_FIELD_SIZE)?;
    debug!("Loaded {} walls from {}", walls.len(), path.as_ref().display());
    Ok(walls)
}

/// One line reported by the robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation<'a> {
    /// Lines of at most one character carry nothing.
    Empty,
    Bot(&'a str),
    /// A wall report. The edge is present when the line is in maze definition format.
    Wall(&'a str, Option<Wall>),
    Other(&'a str),
}

impl<'a> Observation<'a> {
    pub fn parse(line: &'a str) -> Observation<'a> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.chars().count() <= 1 {
            Observation::Empty
        } else if line.starts_with("wall") {
            let wall =
                parse_wall_line(line).and_then(|(x1, y1, x2, y2)| Wall::new(x1, y1, x2, y2).ok());
            Observation::Wall(line, wall)
        } else if line.starts_with("bot") {
            Observation::Bot(line)
        } else {
            Observation::Other(line)
        }
    }
}

/// Collects the walls found in a batch of observation lines, ready for
/// [MazeSnapshot::update_walls](crate::maze::MazeSnapshot::update_walls).
pub fn observed_walls<'a, I>(lines: I) -> WallModel
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| match Observation::parse(line) {
            Observation::Wall(_, wall) => wall,
            _ => None,
        })
        .collect()
}

/// Chooses which observation categories are echoed back as diagnostic comments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObservationFilter {
    pub bot: bool,
    pub walls: bool,
    pub other: bool,
}

impl Default for ObservationFilter {
    fn default() -> ObservationFilter {
        ObservationFilter {
            bot: true,
            walls: true,
            other: false,
        }
    }
}

impl ObservationFilter {
    pub fn accepts(&self, observation: &Observation) -> bool {
        match observation {
            Observation::Empty => false,
            Observation::Bot(_) => self.bot,
            Observation::Wall(..) => self.walls,
            Observation::Other(_) => self.other,
        }
    }

    /// Writes `comment bot == <line>` to `out` if the line's category is enabled. Returns whether
    /// anything was written.
    pub fn echo<W: Write>(&self, line: &str, out: &mut W) -> io::Result<bool> {
        let observation = Observation::parse(line);
        if !self.accepts(&observation) {
            return Ok(false);
        }
        let text = match observation {
            Observation::Bot(text) | Observation::Wall(text, _) | Observation::Other(text) => text,
            Observation::Empty => return Ok(false),
        };
        debug!("Echoing observation {text:?}");
        writeln!(out, "comment bot == {text}")?;
        out.flush()?;
        Ok(true)
    }
}
