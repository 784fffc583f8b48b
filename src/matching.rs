#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow potential wrapping when casting between types as board coordinates are within reasonable ranges
    clippy::cast_possible_wrap
)]

use crate::components::{Board, BlockStatus, Position};
use crate::game::{BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH, MIN_MATCH_LENGTH};
use crate::logic::try_swap;

// One bit per cell in the de-duplication mask
const _: () = assert!(BOARD_SIZE <= u128::BITS as usize);

/// Flag every block that is part of a horizontal or vertical run of three or
/// more as Matched, and return how many distinct blocks were flagged.
///
/// A block shared by a horizontal and a vertical run (L and T shapes) is
/// counted once.
pub fn detect_matches(board: &mut Board) -> usize {
    let mut counted: u128 = 0;
    let mut total = 0;

    for y in 0..BOARD_HEIGHT as i32 {
        total += mark_runs(board, BOARD_WIDTH as i32, |i| (i, y), &mut counted);
    }
    for x in 0..BOARD_WIDTH as i32 {
        total += mark_runs(board, BOARD_HEIGHT as i32, |i| (x, i), &mut counted);
    }

    total
}

// Scan one row or column. `at` maps a step along the line to board coordinates.
fn mark_runs(
    board: &mut Board,
    len: i32,
    at: impl Fn(i32) -> (i32, i32),
    counted: &mut u128,
) -> usize {
    let mut newly_counted = 0;
    let (x0, y0) = at(0);
    let mut run_start = 0;
    let mut run_color = board.get_cell(x0, y0).color;
    let mut run_length = 1;

    // Step `len` is one past the end; it reads as Empty and closes the final run
    for i in 1..=len {
        let (x, y) = at(i);
        let color = board.get_cell(x, y).color;

        if color == run_color && !run_color.is_empty() {
            run_length += 1;
            continue;
        }

        if run_length >= MIN_MATCH_LENGTH as i32 && !run_color.is_empty() {
            for j in run_start..run_start + run_length {
                let (mx, my) = at(j);
                if let Some(idx) = Board::index(mx, my) {
                    let bit = 1u128 << idx;
                    if *counted & bit == 0 {
                        *counted |= bit;
                        newly_counted += 1;
                    }
                }
                board.set_status(mx, my, BlockStatus::Matched);
            }
        }

        run_start = i;
        run_color = color;
        run_length = 1;
    }

    newly_counted
}

#[must_use]
pub fn has_matched_blocks(board: &Board) -> bool {
    board.cells().iter().any(|cell| cell.is_matched())
}

/// First swap position, scanning rows top to bottom and left to right, whose
/// swap would produce at least one match. The board itself is not touched.
#[must_use]
pub fn find_swap_hint(board: &Board) -> Option<Position> {
    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 - 1 {
            let left = board.get_cell(x, y);
            let right = board.get_cell(x + 1, y);
            if left.color == right.color {
                continue;
            }

            let mut trial = board.clone();
            if try_swap(&mut trial, x, y) && detect_matches(&mut trial) > 0 {
                return Some(Position { x, y });
            }
        }
    }
    None
}
