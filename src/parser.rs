use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::board::{Board, BoardErr};
use crate::data::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Dimensions,
    RowCount { expected: usize, found: usize },
    RowLength { row: usize, expected: usize, found: usize },
    Pos(usize, usize),
    Board(BoardErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Dimensions => {
                write!(f, "First line must contain two positive numbers: rows and columns")
            }
            ParserErr::RowCount { expected, found } => {
                write!(f, "Expected {} rows, found {}", expected, found)
            }
            ParserErr::RowLength { row, expected, found } => write!(
                f,
                "Row {} should have {} columns but has {}",
                row, expected, found
            ),
            ParserErr::Pos(r, c) => write!(f, "Invalid tile at pos: [{}, {}]", r, c),
            ParserErr::Board(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParserErr::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardErr> for ParserErr {
    fn from(err: BoardErr) -> Self {
        ParserErr::Board(err)
    }
}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the level format: a `rows cols` line followed by exactly `rows` lines of `cols` tiles.
///
/// The grid ends at the first empty line, anything after it is ignored.
pub(crate) fn parse(level: &str) -> Result<Board, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_start_matches(|c: char| c == '\n' || c == '\r');
    let mut lines = level.lines();

    let (rows, cols) = parse_dimensions(lines.next().unwrap_or(""))?;

    let grid_lines: Vec<_> = lines.take_while(|line| !line.is_empty()).collect();
    if grid_lines.len() != rows {
        return Err(ParserErr::RowCount {
            expected: rows,
            found: grid_lines.len(),
        });
    }

    let mut grid = Vec::with_capacity(rows);
    for (r, line) in grid_lines.into_iter().enumerate() {
        let mut row = Vec::with_capacity(cols);
        for (c, cur_char) in line.chars().enumerate() {
            let tile = Tile::from_char(cur_char).ok_or(ParserErr::Pos(r, c))?;
            row.push(tile);
        }
        if row.len() != cols {
            return Err(ParserErr::RowLength {
                row: r,
                expected: cols,
                found: row.len(),
            });
        }
        grid.push(row);
    }

    let board = Board::from_rows(grid)?;
    debug!("Parsed {}x{} level", rows, cols);
    Ok(board)
}

fn parse_dimensions(line: &str) -> Result<(usize, usize), ParserErr> {
    let mut parts = line.split_whitespace().map(str::parse::<usize>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(rows)), Some(Ok(cols)), None) if rows > 0 && cols > 0 => Ok((rows, cols)),
        _ => Err(ParserErr::Dimensions),
    }
}
