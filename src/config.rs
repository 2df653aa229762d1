#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Print every new best score and every newly reached depth while searching.
    pub print_status: bool,
    /// Only print the move string of a solution, not all the boards.
    pub moves_only: bool,
}

impl Config {
    pub fn new(print_status: bool, moves_only: bool) -> Self {
        Config {
            print_status,
            moves_only,
        }
    }
}
