//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

use itertools::Itertools;
use log::error;

use crate::entities::{CutPlanInstance, CutPlanSolution, Layout, Part};

/// Tolerance for accumulated floating point error in coordinate checks.
const COORD_EPS: f32 = 1e-3;

pub fn instance_part_ids_correct(parts: &[Part]) -> bool {
    parts.iter().enumerate().all(|(i, part)| part.id == i)
}

/// No two placed parts of a layout overlap. Edge-touching is allowed.
pub fn layout_is_collision_free(layout: &Layout) -> bool {
    for (a, b) in layout.placed_parts.iter().tuple_combinations() {
        if a.overlaps(b) {
            error!(
                "parts {} and {} overlap in {}",
                a.part_id, b.part_id, layout.source
            );
            return false;
        }
    }
    true
}

/// Every placed part lies inside the usable area of its layout.
pub fn layout_within_bounds(layout: &Layout, offset: f32) -> bool {
    layout.placed_parts.iter().all(|p| {
        p.x >= offset - COORD_EPS
            && p.y >= offset - COORD_EPS
            && p.x_max() <= layout.area_width - offset + COORD_EPS
            && p.y_max() <= layout.area_height - offset + COORD_EPS
    })
}

/// Cut line positions are ascending and every segment list is sorted and disjoint.
pub fn layout_cuts_are_merged(layout: &Layout) -> bool {
    [&layout.vertical_cuts, &layout.horizontal_cuts]
        .into_iter()
        .all(|cuts| {
            let positions_sorted = cuts.iter().tuple_windows().all(|(a, b)| a.position < b.position);
            let segments_merged = cuts.iter().all(|cut| {
                cut.segments
                    .iter()
                    .tuple_windows()
                    .all(|(a, b)| a.1 < b.0)
            });
            positions_sorted && segments_merged
        })
}

/// Conservation: every part of the instance is either placed exactly once or
/// left in the unplaced pool; nothing is dropped or duplicated.
pub fn solution_matches_instance(instance: &CutPlanInstance, solution: &CutPlanSolution) -> bool {
    let placed_ids = solution
        .layouts
        .iter()
        .flat_map(|l| &l.placed_parts)
        .map(|p| p.part_id)
        .collect_vec();
    let unplaced_ids = solution.unplaced_parts.iter().map(|p| p.id).collect_vec();

    if placed_ids.iter().duplicates().next().is_some() {
        error!("a part is placed in more than one layout");
        return false;
    }
    if placed_ids.len() + unplaced_ids.len() != instance.total_part_qty() {
        error!(
            "conservation violated: {} placed + {} unplaced != {} total",
            placed_ids.len(),
            unplaced_ids.len(),
            instance.total_part_qty()
        );
        return false;
    }
    placed_ids
        .iter()
        .chain(unplaced_ids.iter())
        .all(|&id| id < instance.total_part_qty())
}
