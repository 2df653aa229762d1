use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::{Dir, Pos};

/// Row-major grid. Always at least 1x1.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    /// Builds a grid from rows that have already been checked to be non-empty and rectangular.
    pub(crate) fn new(grid: Vec<Vec<T>>) -> Self {
        let rows = grid.len();
        let cols = grid[0].len();
        debug_assert!(rows > 0 && cols > 0);
        debug_assert!(grid.iter().all(|row| row.len() == cols));

        let data: Vec<T> = grid.into_iter().flatten().collect();
        Vec2d { data, rows, cols }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r < self.rows && pos.c < self.cols
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Pos::new(r, c)))
    }

    /// The cell next to `pos` in direction `dir` or `None` if that's outside the grid.
    pub(crate) fn neighbor(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        match dir {
            Dir::Up if pos.r > 0 => Some(Pos::new(pos.r - 1, pos.c)),
            Dir::Right if pos.c + 1 < self.cols => Some(Pos::new(pos.r, pos.c + 1)),
            Dir::Down if pos.r + 1 < self.rows => Some(Pos::new(pos.r + 1, pos.c)),
            Dir::Left if pos.c > 0 => Some(Pos::new(pos.r, pos.c - 1)),
            _ => None,
        }
    }

    pub(crate) fn scratchpad<U: Copy + Default>(&self) -> Vec2d<U> {
        self.scratchpad_with_default(U::default())
    }

    pub(crate) fn scratchpad_with_default<U: Clone>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub(crate) fn rows_iter(&self) -> std::slice::Chunks<'_, T> {
        self.data.chunks(self.cols)
    }
}

impl Display for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            for &cell in row {
                write!(f, "{}", if cell { 1 } else { 0 })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Vec2d<bool> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[index.r * self.cols + index.c]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        &mut self.data[index.r * self.cols + index.c]
    }
}
