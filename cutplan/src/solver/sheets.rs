use log::debug;

use crate::entities::{Layout, LayoutSource, Part, Stock};
use crate::solver::shelf::{PackArea, pack_area};

/// Drives the shelf packer across successive stock sheets until the pool
/// empties or the sheets run out. Sheets that receive no placement are
/// dropped and do not count as used.
pub(crate) fn allocate(pool: &mut Vec<Part>, stock: &Stock, respect_grain: bool) -> Vec<Layout> {
    let mut layouts = vec![];

    for sheet in 1..=stock.quantity {
        if pool.is_empty() {
            break;
        }
        let area = PackArea {
            source: LayoutSource::Sheet(sheet),
            width: stock.width,
            height: stock.length,
            edge_offset: stock.edge_offset,
            is_remnant: false,
        };
        let layout = pack_area(pool, area, stock.kerf, respect_grain);
        debug!(
            "[PLAN] sheet {}: {} parts placed, {} remaining",
            sheet,
            layout.placed_parts.len(),
            pool.len()
        );
        if !layout.is_empty() {
            layouts.push(layout);
        }
    }

    layouts
}
