use std::fmt::{self, Debug, Display, Formatter};

use log::trace;

use crate::board::Board;
use crate::data::{Dir, Pos, Tile, DIRECTIONS};

// Terminology:
// push = the player walks into a box and it moves one cell further away
// pull = the player steps back and the box follows into the cell the player left
// in both cases `dir` is the direction the box travels

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Push,
    Pull,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub(crate) from: Pos,
    pub(crate) to: Pos,
    pub(crate) dir: Dir,
    pub(crate) kind: MoveKind,
}

impl Move {
    pub(crate) fn new(from: Pos, to: Pos, dir: Dir, kind: MoveKind) -> Self {
        Move { from, to, dir, kind }
    }

    pub fn source(&self) -> Pos {
        self.from
    }

    pub fn dest(&self) -> Pos {
        self.to
    }

    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    pub fn is_push(&self) -> bool {
        self.kind == MoveKind::Push
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_push() {
            write!(f, "{}", self.dir.to_string().to_uppercase())?;
        } else {
            write!(f, "{}", self.dir)?;
        }
        Ok(())
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}->{}", self, self.from, self.to)
    }
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub(crate) fn new(moves: Vec<Move>) -> Self {
        Moves(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.0.iter().filter(|m| m.is_push()).count()
    }

    pub fn pull_cnt(&self) -> usize {
        self.move_cnt() - self.push_cnt()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = ::std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Board {
    /// Every push and pull the player can do from any cell reachable from the start.
    ///
    /// The same resulting board can show up more than once
    /// (pushing a box from one side vs pulling it from the other).
    pub fn legal_moves(&self) -> Vec<Move> {
        let grid = self.grid();
        let reachable = self.reachable();
        let mut moves = Vec::new();

        for player_pos in grid.positions().filter(|&pos| reachable[pos]) {
            for &dir in &DIRECTIONS {
                let box_pos = match grid.neighbor(player_pos, dir) {
                    Some(pos) if grid[pos].is_movable() => pos,
                    _ => continue,
                };

                if let Some(push_dest) = grid.neighbor(box_pos, dir) {
                    if self.can_move_box(box_pos, push_dest) {
                        moves.push(Move::new(box_pos, push_dest, dir, MoveKind::Push));
                    }
                }

                // the box ends up where the player was standing
                if let Some(behind) = grid.neighbor(player_pos, dir.inverse()) {
                    if grid[behind].is_walkable() && self.can_move_box(box_pos, player_pos) {
                        moves.push(Move::new(box_pos, player_pos, dir.inverse(), MoveKind::Pull));
                    }
                }
            }
        }

        trace!("{} legal moves", moves.len());
        moves
    }

    fn can_move_box(&self, from: Pos, to: Pos) -> bool {
        match (self[from], self[to]) {
            (Tile::Box, Tile::Empty) => true,
            (Tile::Banana, Tile::Empty) | (Tile::Banana, Tile::Goal) => true,
            // plain boxes are never allowed on the goal
            _ => false,
        }
    }

    /// Returns a new board with the move applied or `None` if the move can't be done here
    /// (e.g. it was generated for a different board). A banana moved onto the goal is collected.
    pub fn apply(&self, mov: Move) -> Option<Board> {
        let grid = self.grid();
        if !grid.contains(mov.from)
            || grid.neighbor(mov.from, mov.dir) != Some(mov.to)
            || !self.can_move_box(mov.from, mov.to)
        {
            trace!("rejected {:?}", mov);
            return None;
        }

        let mut board = self.clone();
        let tile = self[mov.from];
        board.set(mov.from, Tile::Empty);
        if !(tile == Tile::Banana && mov.to == self.goal()) {
            board.set(mov.to, tile);
        }
        Some(board)
    }
}
