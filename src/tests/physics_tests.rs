#[cfg(test)]
mod tests {
    use crate::board_init::fill_random;
    use crate::components::{BlockColor, Board, Cell};
    use crate::config::ScoringRules;
    use crate::logic::clear_matches;
    use crate::matching::detect_matches;
    use crate::physics::{FallingBlock, apply_gravity};
    use crate::tests::test_utils::{board_from_rows, column_colors};

    #[test]
    fn test_blocks_fall_to_floor() {
        let mut board = Board::new();
        board.set_cell(0, 2, Cell::block(BlockColor::Red));
        board.set_cell(0, 5, Cell::block(BlockColor::Blue));

        let pass = apply_gravity(&mut board);

        assert!(pass.moved());
        assert_eq!(board.get_cell(0, 10), Cell::block(BlockColor::Red));
        assert_eq!(board.get_cell(0, 11), Cell::block(BlockColor::Blue));
        assert_eq!(board.get_cell(0, 2), Cell::EMPTY);
        assert_eq!(board.get_cell(0, 5), Cell::EMPTY);
        assert_eq!(
            pass.blocks,
            vec![
                FallingBlock {
                    x: 0,
                    y: 11,
                    fall_distance: 6
                },
                FallingBlock {
                    x: 0,
                    y: 10,
                    fall_distance: 8
                },
            ]
        );
        assert_eq!(pass.max_fall_distance, 8);
        assert_eq!(pass.total_fall_distance(), 14);
    }

    #[test]
    fn test_resting_blocks_are_not_recorded() {
        let mut board = board_from_rows(&["G.....", "RB...."]);
        let original = board.clone();

        let pass = apply_gravity(&mut board);

        assert!(!pass.moved());
        assert_eq!(pass.max_fall_distance, 0);
        assert_eq!(board, original);
    }

    #[test]
    fn test_only_blocks_above_a_gap_move() {
        let mut board = board_from_rows(&["Y.....", "P.....", "......", "G....."]);

        let pass = apply_gravity(&mut board);

        assert_eq!(pass.blocks.len(), 2);
        assert!(pass.blocks.iter().all(|block| block.fall_distance == 1));
        assert_eq!(
            column_colors(&board, 0),
            vec![BlockColor::Yellow, BlockColor::Purple, BlockColor::Green]
        );
        assert_eq!(board.get_cell(0, 8), Cell::EMPTY);
        assert_eq!(board.get_cell(0, 9).color, BlockColor::Yellow);
    }

    #[test]
    fn test_columns_are_independent() {
        let mut board = board_from_rows(&["R.B...", "......", ".G...."]);

        let pass = apply_gravity(&mut board);

        assert_eq!(board.get_cell(0, 11).color, BlockColor::Red);
        assert_eq!(board.get_cell(1, 11).color, BlockColor::Green);
        assert_eq!(board.get_cell(2, 11).color, BlockColor::Blue);
        assert_eq!(pass.blocks.len(), 2);
        assert_eq!(pass.max_fall_distance, 2);
    }

    #[test]
    fn test_compaction_is_stable_on_random_holes() {
        let mut rng = fastrand::Rng::with_seed(99);
        let mut board = Board::new();
        fill_random(&mut board, &mut rng, 10);
        for y in 0..12 {
            for x in 0..6 {
                if rng.u8(..3) == 0 {
                    board.set_cell(x, y, Cell::EMPTY);
                }
            }
        }

        let before: Vec<Vec<BlockColor>> = (0..6).map(|x| column_colors(&board, x)).collect();
        let row_sum_before: i32 = (0..6)
            .flat_map(|x| (0..12).map(move |y| (x, y)))
            .filter(|&(x, y)| !board.get_cell(x, y).is_empty())
            .map(|(_, y)| y)
            .sum();

        let pass = apply_gravity(&mut board);

        for x in 0..6 {
            let colors = &before[x as usize];
            let filled = colors.len() as i32;
            assert_eq!(&column_colors(&board, x), colors, "column {x}");
            for y in 0..12 - filled {
                assert!(board.get_cell(x, y).is_empty(), "gap left at ({x}, {y})");
            }
            for y in 12 - filled..12 {
                assert!(!board.get_cell(x, y).is_empty(), "hole at ({x}, {y})");
            }
        }

        let row_sum_after: i32 = (0..6)
            .flat_map(|x| (0..12).map(move |y| (x, y)))
            .filter(|&(x, y)| !board.get_cell(x, y).is_empty())
            .map(|(_, y)| y)
            .sum();
        assert_eq!(pass.total_fall_distance(), row_sum_after - row_sum_before);
        assert!(pass.blocks.iter().all(|block| block.fall_distance > 0));
        assert_eq!(
            pass.max_fall_distance,
            pass.blocks
                .iter()
                .map(|block| block.fall_distance)
                .max()
                .unwrap_or(0)
        );
    }

    #[test]
    fn test_cascade_sees_only_settled_board() {
        // Column 0 holds R R over a B run; clearing the run drops the two Rs
        // beside the R R already on the floor.
        let mut board = board_from_rows(&["R.....", "R.....", "B.....", "B.....", "B.....", "BRRG.."]);

        assert_eq!(detect_matches(&mut board), 4);
        assert_eq!(clear_matches(&mut board, &ScoringRules::default()), 4);

        let pass = apply_gravity(&mut board);
        assert_eq!(pass.max_fall_distance, 4);
        assert_eq!(
            column_colors(&board, 0),
            vec![BlockColor::Red, BlockColor::Red]
        );

        assert_eq!(detect_matches(&mut board), 3);
        assert!(board.get_cell(0, 11).is_matched());
        assert!(!board.get_cell(0, 10).is_matched());
    }
}
