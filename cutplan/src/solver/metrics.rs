use crate::entities::{CutDirection, Layout, PlanStep};

/// Lower bound on the number of sheets needed, by area alone.
pub(crate) fn min_estimated_sheets(total_part_area: f32, usable_sheet_area: f32) -> usize {
    if usable_sheet_area <= 0.0 {
        return 0;
    }
    (total_part_area / usable_sheet_area).ceil() as usize
}

/// Material usage and waste percentages over the sheets actually used.
pub(crate) fn usage_and_waste(
    total_part_area: f32,
    usable_sheet_area: f32,
    sheets_used: usize,
) -> (f32, f32) {
    let total_available_area = usable_sheet_area * sheets_used as f32;
    if total_available_area <= 0.0 {
        // no sheet used, no material wasted
        return (0.0, 0.0);
    }
    let usage = (total_part_area / total_available_area * 100.0).round();
    (usage, 100.0 - usage)
}

/// Flattens the cut lines of all layouts into an ordered plan:
/// per layout, vertical lines first, then horizontal lines, each in
/// ascending position order.
pub(crate) fn cutting_plan(layouts: &[Layout]) -> Vec<PlanStep> {
    layouts
        .iter()
        .flat_map(|layout| {
            let vertical = layout.vertical_cuts.iter().map(|cut| PlanStep {
                direction: CutDirection::Vertical,
                position: cut.position,
            });
            let horizontal = layout.horizontal_cuts.iter().map(|cut| PlanStep {
                direction: CutDirection::Horizontal,
                position: cut.position,
            });
            vertical.chain(horizontal).collect::<Vec<_>>()
        })
        .collect()
}
