#[cfg(test)]
mod tests {
    use crate::config::{Config, RulesConfig, ScoringRules, SessionConfig};
    use crate::game::{
        CLEAR_DELAY, FILL_MAX_RETRIES, GRAVITY_CELL_DURATION, SCORE_BONUS_4_MATCH,
        SCORE_BONUS_5_PLUS_MATCH, SCORE_PER_BLOCK, SWAP_DURATION,
    };

    #[test]
    fn test_default_rules_match_constants() {
        let rules = RulesConfig::default();

        assert!((rules.swap_duration - SWAP_DURATION).abs() < f32::EPSILON);
        assert!((rules.gravity_cell_duration - GRAVITY_CELL_DURATION).abs() < f32::EPSILON);
        assert!((rules.clear_delay - CLEAR_DELAY).abs() < f32::EPSILON);
        assert_eq!(rules.fill_max_retries, FILL_MAX_RETRIES);
        assert_eq!(rules.scoring.per_block, SCORE_PER_BLOCK);
        assert_eq!(rules.scoring.bonus_four, SCORE_BONUS_4_MATCH);
        assert_eq!(rules.scoring.bonus_five_plus, SCORE_BONUS_5_PLUS_MATCH);
    }

    #[test]
    fn test_points_for_clear_sizes() {
        let scoring = ScoringRules::default();

        for (cleared, expected) in [(0, 0), (3, 30), (4, 60), (5, 100), (6, 110), (9, 140)] {
            assert_eq!(scoring.points_for(cleared), expected, "{cleared} blocks");
        }
    }

    #[test]
    fn test_points_for_saturates() {
        let scoring = ScoringRules {
            per_block: u32::MAX,
            bonus_four: 0,
            bonus_five_plus: 1,
        };
        assert_eq!(scoring.points_for(72), u32::MAX);
    }

    #[test]
    fn test_default_session() {
        let session = SessionConfig::default();
        assert_eq!(session.seed, None);
        assert!((session.frame_seconds - 1.0 / 60.0).abs() < f32::EPSILON);
        assert_eq!(session.max_moves, 100);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let contents = r"
[rules]
clear_delay = 0.5

[rules.scoring]
per_block = 5

[session]
seed = 42
";

        let config: Config = toml::from_str(contents).unwrap();

        assert!((config.rules.clear_delay - 0.5).abs() < f32::EPSILON);
        assert!((config.rules.swap_duration - SWAP_DURATION).abs() < f32::EPSILON);
        assert_eq!(config.rules.scoring.per_block, 5);
        assert_eq!(config.rules.scoring.bonus_four, SCORE_BONUS_4_MATCH);
        assert_eq!(config.session.seed, Some(42));
        assert_eq!(config.session.max_moves, 100);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
