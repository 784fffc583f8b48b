#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow potential wrapping when casting between types as board coordinates are within reasonable ranges
    clippy::cast_possible_wrap
)]

use bevy_ecs::prelude::*;
use log::info;

use crate::Time;
use crate::components::{
    Board, Cell, Cursor, GameRng, GravityAnimation, Input, Position, RoundPhase, RoundState,
    SwapAnimation,
};
use crate::config::{Config, RulesConfig};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::systems::{input_system, round_system, setup_board};

/// Owns the simulation world. A presentation layer drives it with
/// [`App::move_cursor`], [`App::request_swap`] and one [`App::update`] per
/// frame, and draws from the read-only accessors.
pub struct App {
    pub world: World,
}

impl App {
    /// Build from loaded configuration, seeding from it when a seed is set.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let rng = match config.session.seed {
            Some(seed) => GameRng::seeded(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config.rules.clone(), rng)
    }

    #[must_use]
    pub fn with_seed(rules: RulesConfig, seed: u64) -> Self {
        Self::with_rng(rules, GameRng::seeded(seed))
    }

    fn with_rng(rules: RulesConfig, rng: GameRng) -> Self {
        info!("Starting board with seed {}", rng.seed());

        let mut world = World::new();
        world.insert_resource(Time::new());
        world.insert_resource(Input::default());
        world.insert_resource(Cursor::default());
        world.insert_resource(RoundState::default());
        world.insert_resource(Board::new());
        world.insert_resource(SwapAnimation::new(rules.swap_duration));
        world.insert_resource(GravityAnimation::default());
        world.insert_resource(rules);
        world.insert_resource(rng);

        let mut app = Self { world };
        setup_board(&mut app.world);
        app
    }

    /// Deal a new board from the same random stream and zero the score.
    pub fn reset(&mut self) {
        setup_board(&mut self.world);
    }

    /// Advance the simulation by one frame of `delta_seconds`.
    pub fn update(&mut self, delta_seconds: f32) {
        self.world.resource_mut::<Time>().advance(delta_seconds);
        let delta_seconds = self.world.resource::<Time>().delta_seconds();
        input_system(&mut self.world);
        round_system(&mut self.world, delta_seconds);
    }

    /// Queue a cursor move; applied (and clamped) on the next update.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let mut input = self.world.resource_mut::<Input>();
        input.cursor_dx = input.cursor_dx.saturating_add(dx);
        input.cursor_dy = input.cursor_dy.saturating_add(dy);
    }

    /// Ask to swap the pair under the cursor on the next update.
    pub fn request_swap(&mut self) {
        self.world.resource_mut::<Input>().swap = true;
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.world.resource::<Board>()
    }

    /// Replace the board wholesale, e.g. to load a prepared position.
    pub fn set_board(&mut self, board: Board) {
        self.world.insert_resource(board);
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.board().score()
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        *self.world.resource::<Cursor>()
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.world.resource::<RoundState>().phase
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        self.world.resource::<RoundState>()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.round().is_idle()
    }

    #[must_use]
    pub fn swap_animation(&self) -> &SwapAnimation {
        self.world.resource::<SwapAnimation>()
    }

    #[must_use]
    pub fn gravity_animation(&self) -> &GravityAnimation {
        self.world.resource::<GravityAnimation>()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.world.resource::<Time>().elapsed_seconds()
    }

    /// Every non-empty cell with its grid position, for drawing.
    #[must_use]
    pub fn get_render_cells(&self) -> Vec<(Position, Cell)> {
        let board = self.board();
        let mut cells = Vec::new();

        for y in 0..BOARD_HEIGHT as i32 {
            for x in 0..BOARD_WIDTH as i32 {
                let cell = board.get_cell(x, y);
                if !cell.is_empty() {
                    cells.push((Position { x, y }, cell));
                }
            }
        }

        cells
    }
}
