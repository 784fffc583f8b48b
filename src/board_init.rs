#![warn(clippy::all, clippy::pedantic)]

use crate::components::{BlockColor, Board, Cell};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};

// The two blocks to the left already share this color
fn would_match_horizontal(board: &Board, x: i32, y: i32, color: BlockColor) -> bool {
    x >= 2 && board.get_cell(x - 1, y).color == color && board.get_cell(x - 2, y).color == color
}

// The two blocks above already share this color
fn would_match_vertical(board: &Board, x: i32, y: i32, color: BlockColor) -> bool {
    y >= 2 && board.get_cell(x, y - 1).color == color && board.get_cell(x, y - 2).color == color
}

fn would_create_match(board: &Board, x: i32, y: i32, color: BlockColor) -> bool {
    would_match_horizontal(board, x, y, color) || would_match_vertical(board, x, y, color)
}

/// Fill every cell with a random palette color, row by row from the top-left.
///
/// A color that would complete a run with the blocks already placed to the left
/// or above is re-rolled, up to `max_retries` rolls in total. After that the last
/// roll is kept, so a fresh board can occasionally start with a match.
/// Score and combo are left alone.
pub fn fill_random(board: &mut Board, rng: &mut fastrand::Rng, max_retries: u32) {
    board.clear();

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            let mut color = BlockColor::random(rng);
            let mut rolls = 1;
            while rolls < max_retries && would_create_match(board, x, y, color) {
                color = BlockColor::random(rng);
                rolls += 1;
            }

            board.set_cell(x, y, Cell::block(color));
        }
    }
}
