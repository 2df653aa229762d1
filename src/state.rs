use std::convert::TryFrom;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::board::Board;
use crate::moves::{Move, Moves};

const BANANA_WEIGHT: i64 = 20;
const DIST_WEIGHT: i64 = 5;

struct Node {
    board: Board,
    prev: Option<Rc<Node>>,
    last_move: Option<Move>,
    depth: usize,
}

/// A snapshot of the board together with the path that led to it.
///
/// Cloning is cheap - the board and all ancestors are shared.
/// Equality and hashing only look at the board, not at how we got there.
#[derive(Clone)]
pub struct State(Rc<Node>);

impl State {
    pub fn initial(board: Board) -> Self {
        State(Rc::new(Node {
            board,
            prev: None,
            last_move: None,
            depth: 0,
        }))
    }

    pub fn board(&self) -> &Board {
        &self.0.board
    }

    /// Number of moves from the initial state.
    pub fn depth(&self) -> usize {
        self.0.depth
    }

    pub fn last_move(&self) -> Option<Move> {
        self.0.last_move
    }

    /// One new state per legal move, duplicates included.
    pub fn successors(&self) -> Vec<State> {
        self.0
            .board
            .legal_moves()
            .into_iter()
            .filter_map(|mov| {
                let board = self.0.board.apply(mov)?;
                Some(State(Rc::new(Node {
                    board,
                    prev: Some(Rc::clone(&self.0)),
                    last_move: Some(mov),
                    depth: self.0.depth + 1,
                })))
            })
            .collect()
    }

    pub fn is_won(&self) -> bool {
        self.0.board.bananas_left() == 0
    }

    /// Less is better. Can be negative and overestimates so it's only good for ordering.
    pub fn estimate(&self) -> i64 {
        let board = &self.0.board;
        BANANA_WEIGHT
            .saturating_mul(to_i64(board.bananas_left()))
            .saturating_add(DIST_WEIGHT.saturating_mul(to_i64(board.banana_dist())))
            .saturating_sub(to_i64(board.reachable_count()))
    }

    /// Boards of all ancestors, oldest first. Doesn't include this state's board.
    pub fn history(&self) -> Vec<&Board> {
        let mut boards = Vec::with_capacity(self.0.depth);
        let mut cur = &self.0.prev;
        while let Some(node) = cur {
            boards.push(&node.board);
            cur = &node.prev;
        }
        boards.reverse();
        boards
    }

    /// All moves from the initial state to this one.
    pub fn moves(&self) -> Moves {
        let mut moves = Vec::with_capacity(self.0.depth);
        let mut cur = Some(&self.0);
        while let Some(node) = cur {
            if let Some(mov) = node.last_move {
                moves.push(mov);
            }
            cur = node.prev.as_ref();
        }
        moves.reverse();
        Moves::new(moves)
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::max_value())
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || self.0.board == other.0.board
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.board.hash(state);
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "depth {}:", self.0.depth)?;
        write!(f, "{}", self.0.board)
    }
}

// A long solution would otherwise drop its ancestors recursively.
impl Drop for Node {
    fn drop(&mut self) {
        let mut prev = self.prev.take();
        while let Some(node) = prev {
            match Rc::try_unwrap(node) {
                Ok(mut node) => prev = node.prev.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::data::{Pos, Tile};

    fn initial(level: &str) -> State {
        State::initial(level.parse().unwrap())
    }

    fn count(board: &Board, tile: Tile) -> usize {
        let mut cnt = 0;
        for r in 0..board.rows() {
            for c in 0..board.cols() {
                if board[Pos::new(r, c)] == tile {
                    cnt += 1;
                }
            }
        }
        cnt
    }

    #[test]
    fn estimate_literal() {
        let state = initial(
            r"
3 3
.S.
.B.
.G.
",
        );
        // 1 banana, 1 away from goal, 8 reachable cells
        assert_eq!(state.estimate(), 20 + 5 - 8);
        assert!(!state.is_won());
    }

    #[test]
    fn estimate_on_open_board() {
        let mut level = String::from("60 60\n");
        for r in 0..60 {
            let row: String = (0..60)
                .map(|c| match (r, c) {
                    (0, 0) => 'S',
                    (59, 59) => 'G',
                    (0, 1) => 'B',
                    _ => '.',
                })
                .collect();
            level.push_str(&row);
            level.push('\n');
        }
        let state = initial(&level);
        // the banana blocks nothing
        assert_eq!(state.estimate(), 20 + 5 * (59 + 58) - (60 * 60 - 1));
        assert_eq!(to_i64(usize::max_value()), i64::max_value());
    }

    #[test]
    fn won_without_bananas() {
        let state = initial(
            r"
2 3
SO.
..G
",
        );
        assert!(state.is_won());
    }

    #[test]
    fn successors_keep_path() {
        let state = initial(
            r"
3 3
B.G
.S.
...
",
        );
        let first = state
            .successors()
            .into_iter()
            .find(|s| s.board()[Pos::new(0, 1)] == Tile::Banana)
            .unwrap();
        assert_eq!(first.depth(), 1);
        assert_eq!(first.history(), vec![state.board()]);

        let second = first.successors().into_iter().find(State::is_won).unwrap();
        assert_eq!(second.depth(), 2);
        assert_eq!(second.history(), vec![state.board(), first.board()]);
        assert_eq!(second.moves().to_string(), "rR");
        assert_eq!(second.board().to_string(), "..G\n.S.\n...\n");
        assert!(state.history().is_empty());
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn conservation() {
        let state = initial(
            r"
4 5
.OB..
S.B.O
..GB.
O...#
",
        );
        let boxes = count(state.board(), Tile::Box);
        let bananas = count(state.board(), Tile::Banana);
        let successors = state.successors();
        assert!(!successors.is_empty());

        let mut absorbed = 0;
        for next in &successors {
            assert_eq!(count(next.board(), Tile::Box), boxes);
            assert_eq!(count(next.board(), Tile::Start), 1);
            assert_eq!(count(next.board(), Tile::Goal), 1);
            let next_bananas = count(next.board(), Tile::Banana);
            if next_bananas + 1 == bananas {
                absorbed += 1;
                assert_eq!(next.last_move().unwrap().dest(), next.board().goal());
            } else {
                assert_eq!(next_bananas, bananas);
            }
        }
        assert!(absorbed > 0);
    }

    #[test]
    fn equality_ignores_history() {
        let state = initial(
            r"
1 6
.O.S.G
",
        );
        let pushed = state.successors();
        assert_eq!(pushed.len(), 2); // push left, pull right
        let pulled_back = pushed
            .iter()
            .flat_map(State::successors)
            .find(|s| s.board() == state.board())
            .unwrap();
        assert_eq!(pulled_back.depth(), 2);
        assert_eq!(pulled_back, state);

        let mut set = HashSet::new();
        set.insert(state.clone());
        assert!(set.contains(&pulled_back));
        assert!(!set.contains(&pushed[0]));
    }
}
