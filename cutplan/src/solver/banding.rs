use crate::entities::{CutPlanInstance, Layout, PartBanding, Side};

/// Computes the edge-banding requirement of every part of the instance.
///
/// For a part placed rotated, the banding flags are remapped by the fixed
/// 90 degree cycle (see [`EdgeBanding::rotated`](crate::entities::EdgeBanding::rotated))
/// and the top/bottom run length (the width) is swapped with the left/right
/// run length (the length). Parts that were never placed are measured in
/// their nominal orientation.
///
/// Returns the per-part breakdown and the aggregate strip length.
pub(crate) fn calculate(
    instance: &CutPlanInstance,
    layouts: &[Layout],
) -> (Vec<PartBanding>, f32) {
    let mut by_part = Vec::with_capacity(instance.parts.len());
    let mut total = 0.0;

    for part in &instance.parts {
        let rotated = layouts
            .iter()
            .flat_map(|l| &l.placed_parts)
            .find(|placed| placed.part_id == part.id)
            .is_some_and(|placed| placed.rotated);

        let (banding, top_bottom_run, left_right_run) = match rotated {
            true => (part.edge_banding.rotated(), part.length, part.width),
            false => (part.edge_banding, part.width, part.length),
        };

        let mut sides = vec![];
        let mut length = 0.0;
        if banding.top {
            sides.push(Side::Top);
            length += top_bottom_run;
        }
        if banding.bottom {
            sides.push(Side::Bottom);
            length += top_bottom_run;
        }
        if banding.left {
            sides.push(Side::Left);
            length += left_right_run;
        }
        if banding.right {
            sides.push(Side::Right);
            length += left_right_run;
        }

        total += length;
        by_part.push(PartBanding {
            part_id: part.id,
            sides,
            length,
        });
    }

    (by_part, total)
}
