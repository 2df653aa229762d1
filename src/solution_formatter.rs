use std::fmt::{self, Debug, Display, Formatter};

use crate::state::State;

/// Prints every board from the initial one to `final_state`, separated by empty lines.
pub struct SolutionFormatter<'a> {
    final_state: &'a State,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(final_state: &'a State) -> Self {
        Self { final_state }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for board in self.final_state.history() {
            writeln!(f, "{}", board)?;
        }
        writeln!(f, "{}", self.final_state.board())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
