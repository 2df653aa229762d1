pub mod a_star;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashSet;
use log::debug;

use crate::board::Board;
use crate::config::Config;
use crate::state::State;
use crate::Solve;

use self::a_star::{SearchNode, Stats};

pub struct SolverOk {
    /// The winning state (its history is the solution path) and the number of moves.
    pub solution: Option<(State, usize)>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(solution: Option<(State, usize)>, stats: Stats) -> Self {
        Self { solution, stats }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.solution {
            None => writeln!(f, "No solution")?,
            Some((_, cost)) => writeln!(f, "Moves: {}", cost)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, config: Config) -> SolverOk {
        Solver::new(config).search(State::initial(self.clone()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: Config,
}

impl Solver {
    pub fn new(config: Config) -> Self {
        Solver { config }
    }

    /// The winning state and the number of moves to reach it or `None` if no solution exists.
    pub fn solve(&self, initial: State) -> Option<(State, usize)> {
        self.search(initial).solution
    }

    pub fn search(&self, initial: State) -> SolverOk {
        debug!("Search called");

        let mut stats = Stats::new();
        let mut to_visit = BinaryHeap::new();
        let mut visited = FnvHashSet::default();
        let mut best_cost = i64::max_value();

        let start = SearchNode::new(initial, 0, 0);
        stats.add_created(&start);
        to_visit.push(Reverse(start));

        while let Some(Reverse(cur_node)) = to_visit.pop() {
            if visited.contains(&cur_node.state) {
                stats.add_reached_duplicate(&cur_node);
                continue;
            }
            if stats.add_unique_visited(&cur_node) && self.config.print_status {
                println!("Visited new depth: {}", cur_node.dist);
                println!("{:?}", stats);
            }
            visited.insert(cur_node.state.clone());

            if cur_node.state.is_won() {
                debug!("Solved at depth {}", cur_node.dist);
                return SolverOk::new(Some((cur_node.state, cur_node.dist)), stats);
            }

            for neighbor_state in cur_node.state.successors() {
                // insert and then ignore duplicates when popped
                let h = neighbor_state.estimate();
                let next_node = SearchNode::new(neighbor_state, cur_node.dist + 1, h);
                if next_node.cost() < best_cost {
                    best_cost = next_node.cost();
                    if self.config.print_status {
                        println!("New best score: {}", best_cost);
                    }
                }
                stats.add_created(&next_node);
                to_visit.push(Reverse(next_node));
            }
        }

        debug!("Search space exhausted after {} unique states", visited.len());
        SolverOk::new(None, stats)
    }
}
