use std::io;
use thiserror::Error;

/// The single way a search can fail. Exhausting the frontier is an ordinary outcome, so it is
/// returned as a value rather than raised.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("no path exists from start to goal")]
    NotFound,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum WallError {
    #[error("({x1},{y1})-({x2},{y2}) is not an axis-aligned unit edge")]
    NotUnitEdge { x1: i32, y1: i32, x2: i32, y2: i32 },
}

/// Errors produced while reading a maze definition.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not read maze definition: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: expected `tag x1 y1 x2 y2`, got {content:?}")]
    Malformed { line: usize, content: String },
    #[error("line {line}: {source}")]
    Wall {
        line: usize,
        #[source]
        source: WallError,
    },
}
