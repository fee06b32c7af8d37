//! Initial board provider port.

use crate::board::domain::Board;

/// Provider of the board an engine starts from.
pub trait BoardSeed {
    /// Builds the initial board.
    ///
    /// The returned board must satisfy every board invariant.
    fn initial_board(&self) -> Board;
}
