use std::cmp::Reverse;

use log::debug;
use ordered_float::OrderedFloat;

use crate::config::{CutPlanConfig, RemnantPolicy};
use crate::entities::{Layout, LayoutSource, Part, Remnant, RemnantSide, Stock};
use crate::solver::shelf::{PackArea, pack_area};

/// Fraction of a remnant's area a part may occupy at most under the similar-size policy.
const SIMILAR_AREA_FRAC: f32 = 0.8;

/// Derives the candidate leftover rectangles of the packed sheet layouts:
/// a bottom remnant below the lowest shelf and a right remnant past the
/// furthest shelf cursor, each only if its leftover extent is positive.
pub(crate) fn harvest(layouts: &[Layout], stock: &Stock) -> Vec<Remnant> {
    let mut remnants = vec![];

    for layout in layouts.iter().filter(|l| !l.is_remnant) {
        let LayoutSource::Sheet(sheet) = layout.source else {
            continue;
        };

        let bottom_length = layout.area_height - layout.max_y - stock.kerf;
        if bottom_length > 0.0 {
            remnants.push(Remnant {
                width: layout.area_width - 2.0 * stock.edge_offset,
                length: bottom_length,
                sheet,
                side: RemnantSide::Bottom,
            });
        }

        let right_width = layout.area_width - layout.max_x - stock.kerf;
        if right_width > 0.0 {
            remnants.push(Remnant {
                width: right_width,
                length: layout.max_y,
                sheet,
                side: RemnantSide::Right,
            });
        }
    }

    remnants
}

/// Re-invokes the shelf packer on harvested remnants, largest first, against
/// the shared pool of still unplaced parts. Remnants carry no edge margin.
/// Each remnant is visited at most once; a remnant with at least one placement
/// becomes a layout.
pub(crate) fn reuse(
    pool: &mut Vec<Part>,
    remnants: &[Remnant],
    stock: &Stock,
    config: &CutPlanConfig,
    respect_grain: bool,
) -> Vec<Layout> {
    let mut layouts = vec![];
    if config.remnant_policy == RemnantPolicy::None {
        return layouts;
    }

    let mut ordered = remnants.to_vec();
    ordered.sort_by_key(|r| Reverse(OrderedFloat(r.area())));

    for rem in ordered {
        if pool.is_empty() {
            break;
        }
        if rem.area() < config.min_remnant_area {
            // not worth a machine setup
            continue;
        }

        let mut sub_pool: Vec<Part> = match config.remnant_policy {
            RemnantPolicy::SimilarOnly => pool
                .iter()
                .filter(|p| {
                    p.area() <= rem.area() * SIMILAR_AREA_FRAC
                        && p.longest_dim() <= rem.longest_dim()
                })
                .cloned()
                .collect(),
            _ => pool.clone(),
        };
        if sub_pool.is_empty() {
            continue;
        }

        let area = PackArea {
            source: LayoutSource::Remnant {
                sheet: rem.sheet,
                side: rem.side,
            },
            width: rem.width,
            height: rem.length,
            edge_offset: 0.0,
            is_remnant: true,
        };
        let layout = pack_area(&mut sub_pool, area, stock.kerf, respect_grain);

        if !layout.is_empty() {
            debug!(
                "[PLAN] remnant {}: {} parts placed",
                layout.source,
                layout.placed_parts.len()
            );
            // drain what the remnant absorbed from the shared pool
            pool.retain(|p| {
                !layout
                    .placed_parts
                    .iter()
                    .any(|placed| placed.part_id == p.id)
            });
            layouts.push(layout);
        }
    }

    layouts
}
