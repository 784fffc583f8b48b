use bevy_ecs::prelude::*;
use log::{debug, info, trace};

use crate::board_init::fill_random;
use crate::components::{
    Board, Cursor, GameRng, GravityAnimation, Input, RoundPhase, RoundState, SwapAnimation,
};
use crate::config::RulesConfig;
use crate::logic::{clear_matches, try_swap};
use crate::matching::detect_matches;
use crate::physics::apply_gravity;

/// Deal a fresh random board and put the sequencer back to Idle.
pub fn setup_board(world: &mut World) {
    let max_retries = world.resource::<RulesConfig>().fill_max_retries;

    world.resource_scope(|world, mut rng: Mut<GameRng>| {
        let mut board = world.resource_mut::<Board>();
        board.init();
        fill_random(&mut board, rng.rng_mut(), max_retries);
    });

    world.resource_mut::<RoundState>().reset();
    *world.resource_mut::<Input>() = Input::default();
    *world.resource_mut::<Cursor>() = Cursor::default();

    let swap_duration = world.resource::<RulesConfig>().swap_duration;
    *world.resource_mut::<SwapAnimation>() = SwapAnimation::new(swap_duration);
    *world.resource_mut::<GravityAnimation>() = GravityAnimation::default();

    trace!("Dealt board:\n{}", world.resource::<Board>());
}

/// Apply pending cursor movement. Movement is accepted in every phase.
pub fn input_system(world: &mut World) {
    let (dx, dy) = {
        let mut input = world.resource_mut::<Input>();
        let delta = (input.cursor_dx, input.cursor_dy);
        input.cursor_dx = 0;
        input.cursor_dy = 0;
        delta
    };

    if dx != 0 || dy != 0 {
        let mut cursor = world.resource_mut::<Cursor>();
        cursor.move_by(dx, dy);
        trace!("Cursor moved to ({}, {})", cursor.x, cursor.y);
    }
}

/// Advance the round by one tick.
///
/// At most one animation or timer advances per call, and the board only
/// changes at the swap, clear and gravity commits. A swap request is only
/// honoured while Idle; requests made in any other phase are dropped.
/// Negative or non-finite steps are treated as zero.
pub fn round_system(world: &mut World, delta_seconds: f32) {
    let delta_seconds = if delta_seconds.is_finite() && delta_seconds > 0.0 {
        delta_seconds
    } else {
        0.0
    };
    let swap_requested = std::mem::take(&mut world.resource_mut::<Input>().swap);
    let phase = world.resource::<RoundState>().phase;

    match phase {
        RoundPhase::Idle => {
            if swap_requested {
                handle_swap_request(world);
            }
        }
        RoundPhase::SwapInProgress => advance_swap(world, delta_seconds),
        RoundPhase::MatchedPendingClear => advance_clear_delay(world, delta_seconds),
        RoundPhase::GravityInProgress => advance_gravity(world, delta_seconds),
    }
}

fn handle_swap_request(world: &mut World) {
    if world.resource::<SwapAnimation>().active {
        return;
    }

    let cursor = *world.resource::<Cursor>();
    let swapped = {
        let mut board = world.resource_mut::<Board>();
        let swapped = try_swap(&mut board, cursor.x, cursor.y);
        if swapped {
            board.set_combo(0);
        }
        swapped
    };

    if !swapped {
        debug!("Swap at ({}, {}) rejected", cursor.x, cursor.y);
        return;
    }

    world
        .resource_mut::<SwapAnimation>()
        .start(cursor.x, cursor.y);

    let mut round = world.resource_mut::<RoundState>();
    round.phase = RoundPhase::SwapInProgress;
    round.chain = 0;
    round.swaps += 1;
    debug!("Swap committed at ({}, {})", cursor.x, cursor.y);
}

fn advance_swap(world: &mut World, delta_seconds: f32) {
    if !world
        .resource_mut::<SwapAnimation>()
        .update(delta_seconds)
    {
        return;
    }

    let matched = detect_matches(&mut world.resource_mut::<Board>());
    if matched > 0 {
        debug!("Swap produced {matched} matched blocks");
        enter_clear_delay(world);
    } else {
        world.resource_mut::<RoundState>().phase = RoundPhase::Idle;
    }
}

fn enter_clear_delay(world: &mut World) {
    let clear_delay = world.resource::<RulesConfig>().clear_delay;
    let mut round = world.resource_mut::<RoundState>();
    round.phase = RoundPhase::MatchedPendingClear;
    round.clear_timer = clear_delay;
}

fn advance_clear_delay(world: &mut World, delta_seconds: f32) {
    {
        let mut round = world.resource_mut::<RoundState>();
        round.clear_timer -= delta_seconds;
        if round.clear_timer > 0.0 {
            return;
        }
        round.clear_timer = 0.0;
    }

    let (scoring, cell_duration) = {
        let rules = world.resource::<RulesConfig>();
        (rules.scoring, rules.gravity_cell_duration)
    };

    let chain = world.resource::<RoundState>().chain + 1;
    let (cleared, pass, score) = {
        let mut board = world.resource_mut::<Board>();
        let cleared = clear_matches(&mut board, &scoring);
        board.set_combo(chain);
        let pass = apply_gravity(&mut board);
        (cleared, pass, board.score())
    };

    info!("Cleared {cleared} blocks (chain {chain}), score {score}");

    {
        let mut round = world.resource_mut::<RoundState>();
        round.chain = chain;
        round.last_cleared = cleared;
        round.total_cleared = round
            .total_cleared
            .saturating_add(u32::try_from(cleared).unwrap_or(u32::MAX));
        round.phase = RoundPhase::GravityInProgress;
    }

    world
        .resource_mut::<GravityAnimation>()
        .start(pass, cell_duration);
}

fn advance_gravity(world: &mut World, delta_seconds: f32) {
    let settled = {
        let mut gravity = world.resource_mut::<GravityAnimation>();
        // Nothing fell, so there is nothing to wait for
        !gravity.active || gravity.update(delta_seconds)
    };
    if !settled {
        return;
    }

    let matched = detect_matches(&mut world.resource_mut::<Board>());
    if matched > 0 {
        debug!("Cascade produced {matched} matched blocks");
        enter_clear_delay(world);
    } else {
        let mut round = world.resource_mut::<RoundState>();
        if round.chain > 1 {
            info!("Chain of {} clears finished", round.chain);
        }
        round.phase = RoundPhase::Idle;
    }
}
