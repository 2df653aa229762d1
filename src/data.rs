use std::fmt::{self, Debug, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Obstacle,
    Box,
    Banana,
    Start,
    Goal,
}

impl Tile {
    pub fn from_char(c: char) -> Option<Tile> {
        match c {
            '.' => Some(Tile::Empty),
            '#' => Some(Tile::Obstacle),
            'O' => Some(Tile::Box),
            'B' => Some(Tile::Banana),
            'S' => Some(Tile::Start),
            'G' => Some(Tile::Goal),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Obstacle => '#',
            Tile::Box => 'O',
            Tile::Banana => 'B',
            Tile::Start => 'S',
            Tile::Goal => 'G',
        }
    }

    /// Whether the player can stand on this tile.
    pub fn is_walkable(self) -> bool {
        match self {
            Tile::Obstacle | Tile::Box | Tile::Banana => false,
            Tile::Empty | Tile::Start | Tile::Goal => true,
        }
    }

    pub fn is_movable(self) -> bool {
        self == Tile::Box || self == Tile::Banana
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: usize,
    pub c: usize,
}

impl Pos {
    pub fn new(r: usize, c: usize) -> Pos {
        Pos { r, c }
    }

    pub fn dist(self, other: Pos) -> usize {
        let dr = if self.r > other.r { self.r - other.r } else { other.r - self.r };
        let dc = if self.c > other.c { self.c - other.c } else { other.c - self.c };
        dr + dc
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

impl Dir {
    pub fn inverse(self) -> Self {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Right => write!(f, "r"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
        }
    }
}

impl Debug for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
