use ordered_float::OrderedFloat;

use crate::entities::{Layout, LayoutSource, Part, PlacedPart};
use crate::solver::cuts::CutRegistry;
use crate::util::assertions;

/// A horizontal band of fixed height, filled left to right.
/// The height is set by the first part the shelf accepts.
#[derive(Clone, Debug)]
struct Shelf {
    y: f32,
    height: f32,
    current_x: f32,
}

/// Target area for one invocation of the shelf packer.
#[derive(Clone, Debug, Copy)]
pub(crate) struct PackArea {
    pub source: LayoutSource,
    pub width: f32,
    pub height: f32,
    /// Margin reserved on all four sides. Zero for remnants.
    pub edge_offset: f32,
    pub is_remnant: bool,
}

/// Packs as many parts from `pool` as possible into `area` with a
/// first-fit-decreasing shelf heuristic. Parts that were placed are removed
/// from `pool`; every other part is left untouched. Failing to place a part
/// is not an error, the scan simply moves on.
pub(crate) fn pack_area(
    pool: &mut Vec<Part>,
    area: PackArea,
    kerf: f32,
    respect_grain: bool,
) -> Layout {
    let offset = area.edge_offset;
    let usable_width = area.width - 2.0 * offset;
    let usable_height = area.height - 2.0 * offset;

    let mut v_cuts = CutRegistry::new();
    let mut h_cuts = CutRegistry::new();

    // seed the frame of the usable area, so even an empty layout reports its boundary
    v_cuts.register(offset, offset, area.height - offset);
    v_cuts.register(area.width - offset, offset, area.height - offset);
    h_cuts.register(offset, offset, area.width - offset);
    h_cuts.register(area.height - offset, offset, area.width - offset);

    let mut shelves: Vec<Shelf> = vec![];
    let mut placed_parts: Vec<PlacedPart> = vec![];
    let mut max_x = 0.0_f32;
    let mut max_y = 0.0_f32;

    // work on a copy sorted by area descending; the sort is stable, so parts
    // of equal area keep their pool order
    let mut candidates = pool.clone();
    candidates.sort_by_key(|p| std::cmp::Reverse(OrderedFloat(p.area())));

    for part in &candidates {
        let (p_width, p_height, rotated) =
            orientation(part, &shelves, usable_width, kerf, respect_grain);

        // pure first-fit: shelves are scanned in creation order, not best-fit
        let shelf_idx = shelves
            .iter()
            .position(|s| fits(s, p_width, p_height, usable_width, kerf));

        let shelf = match shelf_idx {
            Some(i) => &mut shelves[i],
            None => {
                let y = match shelves.last() {
                    Some(s) => s.y + s.height + kerf,
                    None => offset,
                };
                if y + p_height > usable_height + offset || p_width > usable_width {
                    // no room for a new shelf holding this part; leave it in the pool
                    continue;
                }
                shelves.push(Shelf {
                    y,
                    height: p_height,
                    current_x: 0.0,
                });
                shelves.last_mut().unwrap()
            }
        };

        let placed = PlacedPart {
            part_id: part.id,
            x: shelf.current_x + offset,
            y: shelf.y,
            width: p_width,
            height: p_height,
            rotated,
        };
        shelf.current_x += p_width + kerf;
        max_x = f32::max(max_x, shelf.current_x);
        max_y = f32::max(max_y, shelf.y + shelf.height);

        v_cuts.register(placed.x, placed.y, placed.y + p_height);
        v_cuts.register(placed.x + p_width, placed.y, placed.y + p_height);
        h_cuts.register(placed.y, placed.x, placed.x + p_width);
        h_cuts.register(placed.y + p_height, placed.x, placed.x + p_width);

        let pool_idx = pool
            .iter()
            .position(|p| p.id == part.id)
            .expect("placed part missing from pool");
        pool.remove(pool_idx);
        placed_parts.push(placed);
    }

    let layout = Layout {
        source: area.source,
        area_width: area.width,
        area_height: area.height,
        placed_parts,
        vertical_cuts: v_cuts.into_cut_lines(),
        horizontal_cuts: h_cuts.into_cut_lines(),
        max_x,
        max_y,
        is_remnant: area.is_remnant,
    };

    debug_assert!(assertions::layout_is_collision_free(&layout));
    debug_assert!(assertions::layout_within_bounds(&layout, offset));
    debug_assert!(assertions::layout_cuts_are_merged(&layout));

    layout
}

/// Decides the placement orientation of a part against the current shelves.
/// Returns (width, height, rotated). Rotation is only used if the rotated form
/// fits an existing shelf and the natural form does not, or both fit and the
/// natural length exceeds the natural width (presenting the shorter dimension
/// as shelf height).
fn orientation(
    part: &Part,
    shelves: &[Shelf],
    usable_width: f32,
    kerf: f32,
    respect_grain: bool,
) -> (f32, f32, bool) {
    if part.rotation_allowed && !(respect_grain && part.grain_locked) {
        let natural_fits = any_shelf_fits(shelves, part.width, part.length, usable_width, kerf);
        let rotated_fits = any_shelf_fits(shelves, part.length, part.width, usable_width, kerf);
        if rotated_fits && (!natural_fits || part.length > part.width) {
            return (part.length, part.width, true);
        }
    }
    (part.width, part.length, false)
}

fn any_shelf_fits(shelves: &[Shelf], width: f32, height: f32, usable_width: f32, kerf: f32) -> bool {
    shelves
        .iter()
        .any(|s| fits(s, width, height, usable_width, kerf))
}

fn fits(shelf: &Shelf, width: f32, height: f32, usable_width: f32, kerf: f32) -> bool {
    height <= shelf.height && shelf.current_x + width + kerf <= usable_width
}
