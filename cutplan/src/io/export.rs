use itertools::Itertools;

use crate::entities::{CutLine, CutPlanInstance, CutPlanSolution, Layout};
use crate::io::ext_repr::{
    ExtCutLine, ExtLayout, ExtPartBanding, ExtPlacedPart, ExtPlanStep, ExtRemnant, ExtSolution,
};

/// Exports a solution out of the library.
pub fn export(instance: &CutPlanInstance, solution: &CutPlanSolution) -> ExtSolution {
    ExtSolution {
        sheets_used: solution.sheets_used as u64,
        available_sheets: solution.available_sheets as u64,
        min_estimated_sheets: solution.min_estimated_sheets as u64,
        material_usage_pct: solution.material_usage_pct,
        waste_pct: solution.waste_pct,
        total_cuts: solution.total_cuts as u64,
        unplaced_parts: solution.unplaced_parts.len() as u64,
        edge_banding_total_length: solution.edge_banding_total_length,
        edge_banding_by_part: solution
            .edge_banding_by_part
            .iter()
            .map(|b| ExtPartBanding {
                part_id: b.part_id as u64,
                name: instance.part(b.part_id).name.clone(),
                sides: b.sides.iter().map(|s| s.to_string()).collect(),
                length: b.length,
            })
            .collect(),
        layouts: solution
            .layouts
            .iter()
            .map(|l| export_layout(l, instance))
            .collect(),
        remnants: solution
            .remnants
            .iter()
            .map(|r| ExtRemnant {
                width: r.width,
                length: r.length,
                area: r.area(),
                location: format!("Sheet {} {}", r.sheet, r.side),
            })
            .collect(),
        cutting_plan: solution
            .cutting_plan
            .iter()
            .map(|step| ExtPlanStep {
                direction: step.direction.to_string(),
                position: step.position,
                cut_type: "guillotine".to_string(),
            })
            .collect(),
    }
}

pub fn export_layout(layout: &Layout, instance: &CutPlanInstance) -> ExtLayout {
    ExtLayout {
        source: layout.source.to_string(),
        is_remnant: layout.is_remnant,
        area_width: layout.area_width,
        area_height: layout.area_height,
        parts: layout
            .placed_parts
            .iter()
            .map(|p| ExtPlacedPart {
                part_id: p.part_id as u64,
                name: instance.part(p.part_id).name.clone(),
                x: p.x,
                y: p.y,
                width: p.width,
                height: p.height,
                rotated: p.rotated,
            })
            .collect(),
        vertical_cuts: export_cut_lines(&layout.vertical_cuts),
        horizontal_cuts: export_cut_lines(&layout.horizontal_cuts),
    }
}

fn export_cut_lines(cuts: &[CutLine]) -> Vec<ExtCutLine> {
    cuts.iter()
        .map(|cut| ExtCutLine {
            position: cut.position,
            segments: cut.segments.clone(),
        })
        .collect_vec()
}
