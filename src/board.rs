use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use crate::data::{Pos, Tile, DIRECTIONS};
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErr {
    Empty,
    NotRectangular(usize),
    NoStart,
    MultipleStarts,
    NoGoal,
    MultipleGoals,
}

impl Display for BoardErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardErr::Empty => write!(f, "Board has no rows or no columns"),
            BoardErr::NotRectangular(r) => {
                write!(f, "Row {} has a different length than the first row", r)
            }
            BoardErr::NoStart => write!(f, "No start tile 'S'"),
            BoardErr::MultipleStarts => write!(f, "More than one start tile 'S'"),
            BoardErr::NoGoal => write!(f, "No goal tile 'G'"),
            BoardErr::MultipleGoals => write!(f, "More than one goal tile 'G'"),
        }
    }
}

impl Error for BoardErr {}

/// The whole grid including boxes and bananas.
///
/// `start` and `goal` are derived from `grid` so including them in `Eq` and `Hash`
/// doesn't change which boards are considered equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Vec2d<Tile>,
    start: Pos,
    goal: Pos,
}

impl Board {
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Board, BoardErr> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(BoardErr::Empty);
        }
        let cols = rows[0].len();
        if let Some(r) = rows.iter().position(|row| row.len() != cols) {
            return Err(BoardErr::NotRectangular(r));
        }

        let grid = Vec2d::new(rows);
        let start = Self::find_single(&grid, Tile::Start)
            .map_err(|found| if found { BoardErr::MultipleStarts } else { BoardErr::NoStart })?;
        let goal = Self::find_single(&grid, Tile::Goal)
            .map_err(|found| if found { BoardErr::MultipleGoals } else { BoardErr::NoGoal })?;

        Ok(Board { grid, start, goal })
    }

    /// `Err(true)` if there are multiple, `Err(false)` if there's none.
    fn find_single(grid: &Vec2d<Tile>, tile: Tile) -> Result<Pos, bool> {
        let mut found = grid.positions().filter(|&pos| grid[pos] == tile);
        match (found.next(), found.next()) {
            (Some(pos), None) => Ok(pos),
            (Some(_), Some(_)) => Err(true),
            (None, _) => Err(false),
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// The player always starts (and for reachability purposes always is) here.
    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    pub(crate) fn grid(&self) -> &Vec2d<Tile> {
        &self.grid
    }

    pub(crate) fn set(&mut self, pos: Pos, tile: Tile) {
        self.grid[pos] = tile;
    }

    pub fn bananas_left(&self) -> usize {
        self.grid.iter().filter(|&&tile| tile == Tile::Banana).count()
    }

    pub fn boxes_left(&self) -> usize {
        self.grid.iter().filter(|&&tile| tile == Tile::Box).count()
    }

    /// Sum of manhattan distances of all bananas to the goal.
    pub fn banana_dist(&self) -> usize {
        self.grid
            .positions()
            .filter(|&pos| self.grid[pos] == Tile::Banana)
            .map(|pos| pos.dist(self.goal))
            .sum()
    }

    /// Cells the player can walk to from the start without moving anything.
    ///
    /// The start itself is always reachable even if it's been walled in by boxes.
    pub(crate) fn reachable(&self) -> Vec2d<bool> {
        let mut reachable = self.grid.scratchpad();
        reachable[self.start] = true;

        let mut to_visit = vec![self.start];
        while let Some(cur) = to_visit.pop() {
            for &dir in &DIRECTIONS {
                if let Some(next) = self.grid.neighbor(cur, dir) {
                    if !reachable[next] && self.grid[next].is_walkable() {
                        reachable[next] = true;
                        to_visit.push(next);
                    }
                }
            }
        }

        reachable
    }

    pub fn reachable_count(&self) -> usize {
        self.reachable().iter().filter(|&&r| r).count()
    }
}

impl Index<Pos> for Board {
    type Output = Tile;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.grid[index]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows_iter() {
            for tile in row {
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
