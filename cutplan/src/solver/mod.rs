//! The layout pipeline: shelf packing, cut-segment derivation, sheet allocation,
//! remnant harvesting and reuse, edge-banding calculation and metrics.

mod banding;
pub mod cuts;
mod metrics;
mod remnants;
mod shelf;
mod sheets;

use log::{info, warn};

use crate::config::CutPlanConfig;
use crate::entities::{CutPlanInstance, CutPlanSolution, Part};
use crate::util::assertions;

/// Runs the full layout pipeline on an instance.
///
/// Deterministic and free of side effects: the same instance and config always
/// produce the same solution. Parts that cannot be placed are returned in the
/// solution rather than treated as an error.
pub fn optimize(instance: &CutPlanInstance, config: CutPlanConfig) -> CutPlanSolution {
    let stock = &instance.stock;
    let respect_grain = config.respect_grain && stock.grain_enabled;

    // the shared pool of unplaced parts, drained first by the sheet allocator,
    // then by the remnant harvester
    let mut pool: Vec<Part> = instance.parts.clone();

    let mut layouts = sheets::allocate(&mut pool, stock, respect_grain);
    let sheets_used = layouts.len();

    if !pool.is_empty() {
        warn!(
            "[PLAN] {} of {} parts could not be placed on {} available sheets",
            pool.len(),
            instance.total_part_qty(),
            stock.quantity
        );
    }

    let remnants = remnants::harvest(&layouts, stock);
    let remnant_layouts = remnants::reuse(&mut pool, &remnants, stock, &config, respect_grain);
    layouts.extend(remnant_layouts);

    let (edge_banding_by_part, edge_banding_total_length) = banding::calculate(instance, &layouts);
    let cutting_plan = metrics::cutting_plan(&layouts);
    let (material_usage_pct, waste_pct) =
        metrics::usage_and_waste(instance.total_part_area(), stock.usable_area(), sheets_used);

    let solution = CutPlanSolution {
        total_cuts: cutting_plan.len(),
        min_estimated_sheets: metrics::min_estimated_sheets(
            instance.total_part_area(),
            stock.usable_area(),
        ),
        layouts,
        remnants,
        unplaced_parts: pool,
        sheets_used,
        available_sheets: stock.quantity,
        material_usage_pct,
        waste_pct,
        cutting_plan,
        edge_banding_by_part,
        edge_banding_total_length,
    };

    debug_assert!(assertions::solution_matches_instance(instance, &solution));

    info!(
        "[PLAN] placed {}/{} parts on {} layouts ({} sheets, {} remnants), usage {:.0}%",
        solution.placed_qty(),
        instance.total_part_qty(),
        solution.layouts.len(),
        solution.sheets_used,
        solution.layouts.len() - solution.sheets_used,
        solution.material_usage_pct,
    );

    solution
}
