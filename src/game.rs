#![warn(clippy::all, clippy::pedantic)]

// Game board dimensions
pub const BOARD_WIDTH: usize = 6;
pub const BOARD_HEIGHT: usize = 12;
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

// Match rules
pub const MIN_MATCH_LENGTH: usize = 3; // Shortest run that counts as a match

// Game timing (seconds)
pub const SWAP_DURATION: f32 = 0.15; // Time for two blocks to trade places
pub const GRAVITY_CELL_DURATION: f32 = 0.15; // Time per cell fallen
pub const CLEAR_DELAY: f32 = 0.3; // Matched highlight stays visible this long before removal

// Scoring
pub const SCORE_PER_BLOCK: u32 = 10;
pub const SCORE_BONUS_4_MATCH: u32 = 20;
pub const SCORE_BONUS_5_PLUS_MATCH: u32 = 50;

// Board generation
pub const FILL_MAX_RETRIES: u32 = 10; // Re-rolls before accepting a color that completes a run
