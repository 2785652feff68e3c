#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use cutplan::config::CutPlanConfig;
    use cutplan::io::{export, import};
    use cutplan::solver;
    use ffd::io;
    use ffd::io::layout_to_svg::layout_to_svg;
    use ffd::io::svg_util::SvgDrawOptions;

    #[test_case("../assets/wardrobe.json"; "wardrobe")]
    #[test_case("../assets/bookcase.json"; "bookcase")]
    #[test_case("../assets/offcut_bench.json"; "offcut_bench")]
    fn test_instance(instance_path: &str) {
        let config = CutPlanConfig::default();
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let instance = import::import(&ext_instance).unwrap();

        let solution = solver::optimize(&instance, config);

        // conservation: every expanded part instance is accounted for
        assert_eq!(
            solution.placed_qty() + solution.unplaced_parts.len(),
            instance.total_part_qty()
        );
        assert!(solution.sheets_used <= solution.available_sheets);
        assert!((0.0..=100.0).contains(&solution.material_usage_pct));
        assert!((0.0..=100.0).contains(&solution.waste_pct));

        // identical input must reproduce the identical solution
        let rerun = solver::optimize(&instance, config);
        assert_eq!(rerun, solution);

        // the full solution must survive the external representation
        let ext_solution = export::export(&instance, &solution);
        serde_json::to_string(&ext_solution).unwrap();

        // every layout must be drawable
        for layout in &solution.layouts {
            let svg = layout_to_svg(layout, &instance, SvgDrawOptions::default());
            assert!(svg.to_string().contains("<svg"));
        }
    }

    #[test]
    fn test_instance_fits_available_stock() {
        let ext_instance = io::read_instance(Path::new("../assets/wardrobe.json")).unwrap();
        let instance = import::import(&ext_instance).unwrap();

        let solution = solver::optimize(&instance, CutPlanConfig::default());

        assert!(solution.unplaced_parts.is_empty());
        assert!(solution.sheets_used >= solution.min_estimated_sheets);
    }
}
