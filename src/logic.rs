#![warn(clippy::all, clippy::pedantic)]

use crate::components::{Board, Cell};
use crate::config::rules::ScoringRules;

/// Exchange the blocks at (x, y) and (x + 1, y).
///
/// Returns false without touching the board when either position is off the
/// board or either block is waiting to be cleared. Only start a swap
/// animation when this returns true.
pub fn try_swap(board: &mut Board, x: i32, y: i32) -> bool {
    if !Board::is_valid_position(x, y) || !Board::is_valid_position(x + 1, y) {
        return false;
    }

    let left = board.get_cell(x, y);
    let right = board.get_cell(x + 1, y);

    // Blocks mid-clear are frozen in place
    if left.is_matched() || right.is_matched() {
        return false;
    }

    board.set_cell(x, y, right);
    board.set_cell(x + 1, y, left);
    true
}

/// Remove every Matched block, award points for them and return how many
/// were removed. Zero is a normal outcome.
pub fn clear_matches(board: &mut Board, scoring: &ScoringRules) -> usize {
    let mut cleared_count = 0;

    for cell in board.cells_mut() {
        if cell.is_matched() {
            *cell = Cell::EMPTY;
            cleared_count += 1;
        }
    }

    board.add_score(scoring.points_for(cleared_count));

    cleared_count
}
