#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss,
    // Allow precision loss when casting fall distances to f32 for animation timing
    clippy::cast_precision_loss,
    // Allow potential wrapping when casting between types of same size as we validate values are in range
    clippy::cast_possible_wrap
)]

use bevy_ecs::prelude::*;
use std::fmt;

use crate::game::{BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH, GRAVITY_CELL_DURATION, SWAP_DURATION};
use crate::physics::{FallingBlock, GravityPass};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockColor {
    #[default]
    Empty,
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
}

impl BlockColor {
    /// Every color a block can take; `Empty` is not part of the palette.
    pub const PALETTE: [BlockColor; 5] = [
        BlockColor::Red,
        BlockColor::Blue,
        BlockColor::Green,
        BlockColor::Yellow,
        BlockColor::Purple,
    ];

    #[must_use]
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self::PALETTE[rng.usize(..Self::PALETTE.len())]
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == BlockColor::Empty
    }

    /// Single-letter code used in board dumps.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            BlockColor::Empty => '.',
            BlockColor::Red => 'R',
            BlockColor::Blue => 'B',
            BlockColor::Green => 'G',
            BlockColor::Yellow => 'Y',
            BlockColor::Purple => 'P',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            '.' | ' ' => Some(BlockColor::Empty),
            'R' => Some(BlockColor::Red),
            'B' => Some(BlockColor::Blue),
            'G' => Some(BlockColor::Green),
            'Y' => Some(BlockColor::Yellow),
            'P' => Some(BlockColor::Purple),
            _ => None,
        }
    }
}

// Falling and Locked are not produced by the current rules but stay representable
// for renderers that want finer-grained bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockStatus {
    #[default]
    Normal,
    Falling,
    Matched,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub color: BlockColor,
    pub status: BlockStatus,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        color: BlockColor::Empty,
        status: BlockStatus::Normal,
    };

    #[must_use]
    pub const fn new(color: BlockColor, status: BlockStatus) -> Self {
        Self { color, status }
    }

    /// A resting block of the given color.
    #[must_use]
    pub const fn block(color: BlockColor) -> Self {
        Self::new(color, BlockStatus::Normal)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.color.is_empty()
    }

    #[must_use]
    pub fn is_matched(self) -> bool {
        self.status == BlockStatus::Matched
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// The playfield: a fixed 6x12 grid stored row-major, plus the running score.
///
/// Every accessor is total. Reads outside the grid yield [`Cell::EMPTY`] and
/// writes outside the grid are ignored.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
    score: u32,
    combo: u32,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; BOARD_SIZE],
            score: 0,
            combo: 0,
        }
    }

    /// Empty the grid and zero the counters.
    pub fn init(&mut self) {
        self.clear();
        self.score = 0;
        self.combo = 0;
    }

    /// Empty the grid, leaving score and combo alone.
    pub fn clear(&mut self) {
        self.cells = [Cell::EMPTY; BOARD_SIZE];
    }

    #[must_use]
    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    #[must_use]
    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    #[must_use]
    pub fn is_valid_position(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_HEIGHT as i32
    }

    /// Row-major index of (x, y), if it lies on the board.
    #[must_use]
    pub fn index(x: i32, y: i32) -> Option<usize> {
        Self::is_valid_position(x, y).then(|| y as usize * BOARD_WIDTH + x as usize)
    }

    #[must_use]
    pub fn get_cell(&self, x: i32, y: i32) -> Cell {
        Self::index(x, y).map_or(Cell::EMPTY, |idx| self.cells[idx])
    }

    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(idx) = Self::index(x, y) {
            self.cells[idx] = cell;
        }
    }

    pub fn set_color(&mut self, x: i32, y: i32, color: BlockColor) {
        if let Some(idx) = Self::index(x, y) {
            self.cells[idx].color = color;
        }
    }

    pub fn set_status(&mut self, x: i32, y: i32, status: BlockStatus) {
        if let Some(idx) = Self::index(x, y) {
            self.cells[idx].status = status;
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score only ever grows.
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    #[must_use]
    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn set_combo(&mut self, combo: u32) {
        self.combo = combo;
    }

    /// Number of cells currently holding a block.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// One line per row, top row first. Matched blocks are printed lowercase.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_HEIGHT as i32 {
            for x in 0..BOARD_WIDTH as i32 {
                let cell = self.get_cell(x, y);
                let c = cell.color.to_char();
                let c = if cell.is_matched() {
                    c.to_ascii_lowercase()
                } else {
                    c
                };
                write!(f, "{c}")?;
            }
            if y + 1 < BOARD_HEIGHT as i32 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Two-cell-wide selector; (x, y) is the left cell of the pair
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

impl Cursor {
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
        self.clamp();
    }

    /// Keep both cells of the pair on the board.
    pub fn clamp(&mut self) {
        self.x = self.x.clamp(0, BOARD_WIDTH as i32 - 2);
        self.y = self.y.clamp(0, BOARD_HEIGHT as i32 - 1);
    }

    #[must_use]
    pub fn position(self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }
}

impl Default for Cursor {
    // Start at bottom-left of board
    fn default() -> Self {
        Self {
            x: 0,
            y: BOARD_HEIGHT as i32 - 1,
        }
    }
}

// Player commands gathered since the last tick
#[derive(Resource, Debug, Clone, Default)]
pub struct Input {
    pub cursor_dx: i32,
    pub cursor_dy: i32,
    pub swap: bool,
}

/// Advances an animation clock, returning true exactly once when it finishes.
fn advance_progress(active: &mut bool, progress: &mut f32, duration: f32, delta_seconds: f32) -> bool {
    if !*active {
        return false;
    }

    if duration > 0.0 {
        *progress += delta_seconds / duration;
    } else {
        *progress = 1.0;
    }

    if *progress >= 1.0 {
        *progress = 1.0;
        *active = false;
        return true;
    }

    false
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SwapAnimation {
    pub active: bool,
    // Grid position of the left block of the pair
    pub x: i32,
    pub y: i32,
    pub progress: f32,
    pub duration: f32,
}

impl SwapAnimation {
    #[must_use]
    pub fn new(duration: f32) -> Self {
        Self {
            active: false,
            x: 0,
            y: 0,
            progress: 0.0,
            duration,
        }
    }

    pub fn start(&mut self, x: i32, y: i32) {
        self.active = true;
        self.x = x;
        self.y = y;
        self.progress = 0.0;
    }

    /// Returns true on the tick the animation completes.
    pub fn update(&mut self, delta_seconds: f32) -> bool {
        advance_progress(
            &mut self.active,
            &mut self.progress,
            self.duration,
            delta_seconds,
        )
    }
}

impl Default for SwapAnimation {
    fn default() -> Self {
        Self::new(SWAP_DURATION)
    }
}

/// Interpolation data for the blocks moved by the most recent gravity pass.
///
/// The board already holds every block at its final row; renderers draw each
/// recorded block `fall_distance * (1 - progress)` rows above its destination.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GravityAnimation {
    pub active: bool,
    pub progress: f32,
    pub duration: f32,
    pub blocks: Vec<FallingBlock>,
}

impl GravityAnimation {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: false,
            progress: 0.0,
            duration: GRAVITY_CELL_DURATION,
            blocks: Vec::new(),
        }
    }

    /// Take over the moves of a gravity pass. The animation stays inactive if
    /// nothing fell; otherwise it lasts `cell_duration` per row of the longest drop.
    pub fn start(&mut self, pass: GravityPass, cell_duration: f32) {
        self.progress = 0.0;
        self.active = pass.moved();
        if self.active {
            self.duration = cell_duration * pass.max_fall_distance as f32;
        }
        self.blocks = pass.blocks;
    }

    /// Returns true on the tick the animation completes.
    pub fn update(&mut self, delta_seconds: f32) -> bool {
        advance_progress(
            &mut self.active,
            &mut self.progress,
            self.duration,
            delta_seconds,
        )
    }
}

impl Default for GravityAnimation {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    #[default]
    Idle,
    SwapInProgress,
    MatchedPendingClear,
    GravityInProgress,
}

// Sequencer state plus per-session statistics
#[derive(Resource, Debug, Clone, Default)]
pub struct RoundState {
    pub phase: RoundPhase,
    pub clear_timer: f32,
    // Clears since the last committed swap; mirrored into Board::combo
    pub chain: u32,
    pub swaps: u32,
    pub total_cleared: u32,
    pub last_cleared: usize,
}

impl RoundState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == RoundPhase::Idle
    }
}

/// Random source for board generation, injected so runs can be replayed.
#[derive(Resource, Debug)]
pub struct GameRng {
    rng: fastrand::Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            seed,
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::seeded(fastrand::u64(..))
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rng_mut(&mut self) -> &mut fastrand::Rng {
        &mut self.rng
    }
}
