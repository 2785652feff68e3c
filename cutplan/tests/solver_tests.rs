#[cfg(test)]
mod tests {
    use test_case::test_case;

    use cutplan::config::{CutPlanConfig, RemnantPolicy};
    use cutplan::entities::{CutPlanInstance, EdgeBanding, LayoutSource, Part, RemnantSide, Stock};
    use cutplan::solver;

    fn part(id: usize, width: f32, length: f32) -> Part {
        Part {
            id,
            name: format!("part {id}"),
            width,
            length,
            rotation_allowed: true,
            grain_locked: false,
            edge_banding: EdgeBanding::NONE,
        }
    }

    fn fixed_part(id: usize, width: f32, length: f32) -> Part {
        Part {
            rotation_allowed: false,
            ..part(id, width, length)
        }
    }

    fn stock(width: f32, length: f32, quantity: usize, kerf: f32, edge_offset: f32) -> Stock {
        Stock {
            width,
            length,
            quantity,
            kerf,
            edge_offset,
            grain_enabled: false,
        }
    }

    fn config(remnant_policy: RemnantPolicy) -> CutPlanConfig {
        CutPlanConfig {
            remnant_policy,
            ..CutPlanConfig::default()
        }
    }

    #[test]
    fn single_part_yields_frame_and_edge_cuts() {
        let instance = CutPlanInstance::new(
            vec![fixed_part(0, 50.0, 50.0)],
            stock(200.0, 100.0, 1, 0.0, 0.0),
        );

        let solution = solver::optimize(&instance, config(RemnantPolicy::None));

        assert_eq!(solution.sheets_used, 1);
        let layout = &solution.layouts[0];
        assert_eq!(layout.placed_parts.len(), 1);

        let placed = &layout.placed_parts[0];
        assert_eq!((placed.x, placed.y), (0.0, 0.0));
        assert_eq!((placed.width, placed.height), (50.0, 50.0));
        assert!(!placed.rotated);

        let v_positions: Vec<f32> = layout.vertical_cuts.iter().map(|c| c.position).collect();
        let h_positions: Vec<f32> = layout.horizontal_cuts.iter().map(|c| c.position).collect();
        assert_eq!(v_positions, vec![0.0, 50.0, 200.0]);
        assert_eq!(h_positions, vec![0.0, 50.0, 100.0]);

        // the part's left edge merges into the frame line at x=0
        assert_eq!(layout.vertical_cuts[0].segments, vec![(0.0, 100.0)]);
        assert_eq!(layout.vertical_cuts[1].segments, vec![(0.0, 50.0)]);

        assert_eq!(solution.total_cuts, 6);
        assert_eq!(solution.cutting_plan.len(), 6);
    }

    #[test]
    fn equal_parts_stack_onto_successive_shelves() {
        let parts = vec![
            fixed_part(0, 80.0, 10.0),
            fixed_part(1, 80.0, 10.0),
            fixed_part(2, 80.0, 10.0),
        ];
        let instance = CutPlanInstance::new(parts, stock(100.0, 100.0, 1, 0.0, 0.0));

        let solution = solver::optimize(&instance, config(RemnantPolicy::None));

        assert!(solution.unplaced_parts.is_empty());
        let layout = &solution.layouts[0];
        let mut y_positions: Vec<f32> = layout.placed_parts.iter().map(|p| p.y).collect();
        y_positions.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(y_positions, vec![0.0, 10.0, 20.0]);
        assert!(layout.placed_parts.iter().all(|p| p.x == 0.0));
    }

    #[test]
    fn kerf_separates_parts_on_a_shelf() {
        let parts = vec![fixed_part(0, 40.0, 40.0), fixed_part(1, 40.0, 40.0)];
        let instance = CutPlanInstance::new(parts, stock(100.0, 100.0, 1, 5.0, 0.0));

        let solution = solver::optimize(&instance, config(RemnantPolicy::None));

        let layout = &solution.layouts[0];
        assert_eq!(layout.placed_parts[0].x, 0.0);
        assert_eq!(layout.placed_parts[1].x, 45.0);
    }

    #[test]
    fn oversized_second_part_stays_unplaced() {
        let parts = vec![fixed_part(0, 96.0, 96.0), fixed_part(1, 96.0, 96.0)];
        let instance = CutPlanInstance::new(parts, stock(100.0, 100.0, 1, 5.0, 0.0));

        let solution = solver::optimize(&instance, config(RemnantPolicy::None));

        assert_eq!(solution.placed_qty(), 1);
        assert_eq!(solution.unplaced_parts.len(), 1);
        assert_eq!(solution.sheets_used, 1);
        // leftover extents are consumed by the kerf, no remnant survives
        assert!(solution.remnants.is_empty());
        assert!(solution.min_estimated_sheets > solution.available_sheets);
    }

    #[test]
    fn spillover_continues_on_the_next_sheet() {
        let parts = vec![
            fixed_part(0, 96.0, 96.0),
            fixed_part(1, 96.0, 96.0),
            fixed_part(2, 96.0, 96.0),
        ];
        let instance = CutPlanInstance::new(parts, stock(100.0, 100.0, 3, 5.0, 0.0));

        let solution = solver::optimize(&instance, config(RemnantPolicy::None));

        assert_eq!(solution.sheets_used, 3);
        assert!(solution.unplaced_parts.is_empty());
        let sources: Vec<LayoutSource> = solution.layouts.iter().map(|l| l.source).collect();
        assert_eq!(
            sources,
            vec![
                LayoutSource::Sheet(1),
                LayoutSource::Sheet(2),
                LayoutSource::Sheet(3)
            ]
        );
    }

    #[test]
    fn edge_offset_insets_every_placement() {
        let parts = vec![fixed_part(0, 50.0, 50.0), fixed_part(1, 50.0, 50.0)];
        let instance = CutPlanInstance::new(parts, stock(120.0, 120.0, 1, 0.0, 10.0));

        let solution = solver::optimize(&instance, config(RemnantPolicy::None));

        let layout = &solution.layouts[0];
        assert_eq!(layout.placed_parts[0].x, 10.0);
        assert_eq!(layout.placed_parts[0].y, 10.0);
        assert_eq!(layout.placed_parts[1].x, 60.0);
        for placed in &layout.placed_parts {
            assert!(placed.x_max() <= 110.0);
            assert!(placed.y_max() <= 110.0);
        }

        let v_positions: Vec<f32> = layout.vertical_cuts.iter().map(|c| c.position).collect();
        assert_eq!(v_positions, vec![10.0, 60.0, 110.0]);
    }

    #[test]
    fn part_rotates_when_only_the_rotated_form_fits() {
        let parts = vec![fixed_part(0, 90.0, 30.0), part(1, 25.0, 8.0)];
        let instance = CutPlanInstance::new(parts, stock(100.0, 50.0, 1, 0.0, 0.0));

        let solution = solver::optimize(&instance, config(RemnantPolicy::None));

        assert!(solution.unplaced_parts.is_empty());
        let placed = &solution.layouts[0].placed_parts[1];
        assert_eq!(placed.part_id, 1);
        assert!(placed.rotated);
        assert_eq!((placed.x, placed.y), (90.0, 0.0));
        assert_eq!((placed.width, placed.height), (8.0, 25.0));
    }

    // when both orientations fit an existing shelf, the shorter dimension is
    // presented as the shelf height, so only a part longer than wide rotates
    #[test_case(30.0, 45.0, true, 45.0; "longer than wide rotates")]
    #[test_case(45.0, 30.0, false, 45.0; "wider than long stays natural")]
    fn rotation_tie_break(width: f32, length: f32, exp_rotated: bool, exp_width: f32) {
        let parts = vec![fixed_part(0, 100.0, 50.0), part(1, width, length)];
        let instance = CutPlanInstance::new(parts, stock(200.0, 100.0, 1, 0.0, 0.0));

        let solution = solver::optimize(&instance, config(RemnantPolicy::None));

        let placed = &solution.layouts[0].placed_parts[1];
        assert_eq!(placed.rotated, exp_rotated);
        assert_eq!(placed.width, exp_width);
    }

    #[test_case(true, 1; "grain respected, part stays unplaced")]
    #[test_case(false, 2; "grain ignored, part rotates into place")]
    fn grain_lock_blocks_rotation(respect_grain: bool, exp_placed: usize) {
        let locked = Part {
            grain_locked: true,
            ..part(1, 25.0, 8.0)
        };
        let parts = vec![fixed_part(0, 90.0, 30.0), locked];
        let mut stock = stock(100.0, 35.0, 1, 0.0, 0.0);
        stock.grain_enabled = true;
        let instance = CutPlanInstance::new(parts, stock);

        let config = CutPlanConfig {
            remnant_policy: RemnantPolicy::None,
            respect_grain,
            ..CutPlanConfig::default()
        };
        let solution = solver::optimize(&instance, config);

        assert_eq!(solution.placed_qty(), exp_placed);
    }

    #[test]
    fn leftover_part_lands_on_the_right_remnant() {
        let parts = vec![
            part(0, 900.0, 450.0),
            part(1, 900.0, 450.0),
            fixed_part(2, 80.0, 800.0),
        ];
        let instance = CutPlanInstance::new(parts, stock(1000.0, 1000.0, 1, 0.0, 0.0));

        let solution = solver::optimize(&instance, config(RemnantPolicy::SimilarOnly));

        assert!(solution.unplaced_parts.is_empty());
        assert_eq!(solution.sheets_used, 1);
        assert_eq!(solution.layouts.len(), 2);

        // both leftovers are reported, only the right one receives a part
        assert_eq!(solution.remnants.len(), 2);
        let remnant_layout = &solution.layouts[1];
        assert!(remnant_layout.is_remnant);
        assert_eq!(
            remnant_layout.source,
            LayoutSource::Remnant {
                sheet: 1,
                side: RemnantSide::Right
            }
        );
        assert_eq!((remnant_layout.area_width, remnant_layout.area_height), (100.0, 900.0));

        let placed = &remnant_layout.placed_parts[0];
        assert_eq!(placed.part_id, 2);
        assert_eq!((placed.x, placed.y), (0.0, 0.0));
    }

    // the straggler covers more than 0.8x of the only remnant it fits, so the
    // similar-size policy skips it while the permissive policy places it
    #[test_case(RemnantPolicy::Any, 0; "any policy places it")]
    #[test_case(RemnantPolicy::SimilarOnly, 1; "similar size policy skips it")]
    #[test_case(RemnantPolicy::None, 1; "no reuse leaves it unplaced")]
    fn remnant_policy_governs_reuse(policy: RemnantPolicy, exp_unplaced: usize) {
        let parts = vec![
            fixed_part(0, 900.0, 450.0),
            fixed_part(1, 900.0, 450.0),
            fixed_part(2, 90.0, 850.0),
        ];
        let instance = CutPlanInstance::new(parts, stock(1000.0, 1000.0, 1, 0.0, 0.0));

        let solution = solver::optimize(&instance, config(policy));

        assert_eq!(solution.unplaced_parts.len(), exp_unplaced);
        assert_eq!(solution.remnants.len(), 2);
        assert_eq!(
            solution.placed_qty() + solution.unplaced_parts.len(),
            instance.total_part_qty()
        );
    }

    #[test]
    fn tiny_remnants_are_reported_but_not_reused() {
        let parts = vec![
            part(0, 900.0, 450.0),
            part(1, 900.0, 450.0),
            fixed_part(2, 80.0, 800.0),
        ];
        let instance = CutPlanInstance::new(parts, stock(1000.0, 1000.0, 1, 0.0, 0.0));

        let config = CutPlanConfig {
            remnant_policy: RemnantPolicy::Any,
            min_remnant_area: f32::MAX,
            ..CutPlanConfig::default()
        };
        let solution = solver::optimize(&instance, config);

        assert_eq!(solution.unplaced_parts.len(), 1);
        assert_eq!(solution.remnants.len(), 2);
        assert_eq!(solution.layouts.len(), 1);
    }

    #[test]
    fn empty_catalog_yields_zero_valued_solution() {
        let instance = CutPlanInstance::new(vec![], stock(200.0, 100.0, 5, 3.0, 10.0));

        let solution = solver::optimize(&instance, CutPlanConfig::default());

        assert!(solution.layouts.is_empty());
        assert!(solution.remnants.is_empty());
        assert!(solution.unplaced_parts.is_empty());
        assert_eq!(solution.sheets_used, 0);
        assert_eq!(solution.available_sheets, 5);
        assert_eq!(solution.min_estimated_sheets, 0);
        assert_eq!(solution.material_usage_pct, 0.0);
        assert_eq!(solution.waste_pct, 0.0);
        assert_eq!(solution.total_cuts, 0);
        assert_eq!(solution.edge_banding_total_length, 0.0);
    }

    #[test]
    fn usage_and_waste_cover_the_used_sheets() {
        let instance = CutPlanInstance::new(
            vec![fixed_part(0, 50.0, 50.0)],
            stock(200.0, 100.0, 1, 0.0, 0.0),
        );

        let solution = solver::optimize(&instance, config(RemnantPolicy::None));

        // 2500 of 20000 usable, rounded to whole percent
        assert_eq!(solution.material_usage_pct, 13.0);
        assert_eq!(solution.waste_pct, 87.0);
        assert_eq!(solution.min_estimated_sheets, 1);
    }

    #[test]
    fn identical_runs_produce_identical_solutions() {
        let parts = vec![
            part(0, 900.0, 450.0),
            part(1, 900.0, 450.0),
            fixed_part(2, 80.0, 800.0),
        ];
        let instance = CutPlanInstance::new(parts, stock(1000.0, 1000.0, 2, 3.0, 5.0));
        let config = CutPlanConfig::default();

        let a = solver::optimize(&instance, config);
        let b = solver::optimize(&instance, config);

        assert_eq!(a, b);
    }
}
