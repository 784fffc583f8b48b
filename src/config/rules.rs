use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::game::{
    CLEAR_DELAY, FILL_MAX_RETRIES, GRAVITY_CELL_DURATION, SCORE_BONUS_4_MATCH,
    SCORE_BONUS_5_PLUS_MATCH, SCORE_PER_BLOCK, SWAP_DURATION,
};

// Timing and scoring rules the simulation runs with
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub swap_duration: f32,
    pub gravity_cell_duration: f32,
    pub clear_delay: f32,
    pub fill_max_retries: u32,
    pub scoring: ScoringRules,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            swap_duration: SWAP_DURATION,
            gravity_cell_duration: GRAVITY_CELL_DURATION,
            clear_delay: CLEAR_DELAY,
            fill_max_retries: FILL_MAX_RETRIES,
            scoring: ScoringRules::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub per_block: u32,
    // Flat bonus for a clear of exactly four blocks
    pub bonus_four: u32,
    // Flat bonus for a clear of five or more blocks
    pub bonus_five_plus: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            per_block: SCORE_PER_BLOCK,
            bonus_four: SCORE_BONUS_4_MATCH,
            bonus_five_plus: SCORE_BONUS_5_PLUS_MATCH,
        }
    }
}

impl ScoringRules {
    /// Points for removing `cleared` blocks in one clear.
    #[must_use]
    pub fn points_for(&self, cleared: usize) -> u32 {
        let count = u32::try_from(cleared).unwrap_or(u32::MAX);
        let bonus = match cleared {
            5.. => self.bonus_five_plus,
            4 => self.bonus_four,
            _ => 0,
        };
        count.saturating_mul(self.per_block).saturating_add(bonus)
    }
}
