use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use crate::entities::CutLine;

/// Accumulates guillotine cut segments for one axis.
///
/// Lines are keyed by their position on the perpendicular axis and kept in
/// ascending position order. The segment list of every line is sorted,
/// disjoint and merged at all times.
#[derive(Clone, Debug, Default)]
pub struct CutRegistry {
    lines: BTreeMap<OrderedFloat<f32>, Vec<(f32, f32)>>,
}

impl CutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a `[start, end]` segment on the line at `position`.
    pub fn register(&mut self, position: f32, start: f32, end: f32) {
        let segments = self.lines.entry(OrderedFloat(position)).or_default();
        *segments = merge_segments(segments, (start, end));
    }

    pub fn into_cut_lines(self) -> Vec<CutLine> {
        self.lines
            .into_iter()
            .map(|(position, segments)| CutLine {
                position: position.into_inner(),
                segments,
            })
            .collect()
    }
}

/// Merges a new segment into a sorted, disjoint segment list and returns the
/// merged result. Segments that touch or overlap the new one are coalesced.
///
/// Idempotent: merging a segment the list already covers changes nothing.
pub fn merge_segments(existing: &[(f32, f32)], new: (f32, f32)) -> Vec<(f32, f32)> {
    let mut all = existing.to_vec();
    all.push(new);
    all.sort_by_key(|&(start, _)| OrderedFloat(start));

    let mut merged: Vec<(f32, f32)> = Vec::with_capacity(all.len());
    for (start, end) in all {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = f32::max(last.1, end),
            _ => merged.push((start, end)),
        }
    }
    merged
}
