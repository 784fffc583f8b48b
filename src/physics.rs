#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow potential wrapping when casting between types as board coordinates are within reasonable ranges
    clippy::cast_possible_wrap
)]

use log::trace;

use crate::components::{Board, Cell};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};

// A block that changed row during a gravity pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingBlock {
    // Destination cell
    pub x: i32,
    pub y: i32,
    pub fall_distance: i32,
}

/// Outcome of one gravity pass over the whole board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GravityPass {
    /// Moved blocks, column by column from the left, bottom-most first.
    pub blocks: Vec<FallingBlock>,
    pub max_fall_distance: i32,
}

impl GravityPass {
    #[must_use]
    pub fn moved(&self) -> bool {
        !self.blocks.is_empty()
    }

    /// Sum of the distances fallen, i.e. how many vacated cells got refilled.
    #[must_use]
    pub fn total_fall_distance(&self) -> i32 {
        self.blocks.iter().map(|block| block.fall_distance).sum()
    }
}

/// Drop every block down its column until it rests on the floor or another block.
///
/// Columns are compacted independently and stably: blocks keep their relative
/// order and all empty cells end up at the top. Blocks that did not move are
/// not recorded.
pub fn apply_gravity(board: &mut Board) -> GravityPass {
    let mut pass = GravityPass::default();

    for x in 0..BOARD_WIDTH as i32 {
        // Row the next block found should land on
        let mut write_y = BOARD_HEIGHT as i32 - 1;

        for read_y in (0..BOARD_HEIGHT as i32).rev() {
            let cell = board.get_cell(x, read_y);
            if cell.is_empty() {
                continue;
            }

            let fall_distance = write_y - read_y;
            if fall_distance > 0 {
                board.set_cell(x, write_y, cell);
                board.set_cell(x, read_y, Cell::EMPTY);
                pass.blocks.push(FallingBlock {
                    x,
                    y: write_y,
                    fall_distance,
                });
                pass.max_fall_distance = pass.max_fall_distance.max(fall_distance);
            }

            write_y -= 1;
        }
    }

    trace!(
        "Gravity moved {} blocks, longest drop {}",
        pass.blocks.len(),
        pass.max_fall_distance
    );

    pass
}
