use anyhow::{Result, ensure};

use crate::entities::{CutPlanInstance, EdgeBanding, Part, Stock};
use crate::io::ext_repr::{ExtInstance, ExtPartEntry};

/// Imports an external instance into the library, expanding every catalog
/// entry into `quantity` independent part instances with consecutive ids.
///
/// An empty catalog is not an error; it yields an instance that produces a
/// zero-valued solution.
pub fn import(ext_instance: &ExtInstance) -> Result<CutPlanInstance> {
    validate(ext_instance)?;

    let ext_stock = &ext_instance.stock;
    let stock = Stock {
        width: ext_stock.width,
        length: ext_stock.length,
        quantity: ext_stock.quantity as usize,
        kerf: ext_stock.kerf,
        edge_offset: ext_stock.edge_offset,
        grain_enabled: ext_stock.grain_enabled,
    };

    let mut parts = vec![];
    for (entry_idx, entry) in ext_instance.parts.iter().enumerate() {
        let name = entry
            .name
            .clone()
            .unwrap_or_else(|| format!("Part {}", entry_idx + 1));
        for _ in 0..entry.quantity {
            parts.push(Part {
                id: parts.len(),
                name: name.clone(),
                width: entry.width,
                length: entry.length,
                rotation_allowed: entry.rotation_allowed,
                grain_locked: entry.grain_locked,
                edge_banding: EdgeBanding {
                    top: entry.edge_banding.top,
                    bottom: entry.edge_banding.bottom,
                    left: entry.edge_banding.left,
                    right: entry.edge_banding.right,
                },
            });
        }
    }

    Ok(CutPlanInstance::new(parts, stock))
}

/// Checks every field of the external instance and reports all violations in
/// a single error, one entry per offending field.
fn validate(ext_instance: &ExtInstance) -> Result<()> {
    let mut violations = vec![];
    let stock = &ext_instance.stock;

    if !(stock.width > 0.0) {
        violations.push("stock width must be greater than 0".to_string());
    }
    if !(stock.length > 0.0) {
        violations.push("stock length must be greater than 0".to_string());
    }
    if stock.quantity < 1 {
        violations.push("stock quantity must be at least 1".to_string());
    }
    if !(stock.kerf >= 0.0) {
        violations.push("kerf must be non-negative".to_string());
    }
    if !(stock.edge_offset >= 0.0) {
        violations.push("edge offset must be non-negative".to_string());
    } else if stock.width > 0.0
        && stock.length > 0.0
        && 2.0 * stock.edge_offset >= f32::min(stock.width, stock.length)
    {
        violations.push("edge offset leaves no usable sheet area".to_string());
    }

    for (idx, entry) in ext_instance.parts.iter().enumerate() {
        let label = part_label(entry, idx);
        if !(entry.width > 0.0) {
            violations.push(format!("{label}: width must be greater than 0"));
        }
        if !(entry.length > 0.0) {
            violations.push(format!("{label}: length must be greater than 0"));
        }
        if entry.quantity < 1 {
            violations.push(format!("{label}: quantity must be at least 1"));
        }
    }

    ensure!(
        violations.is_empty(),
        "invalid instance: {}",
        violations.join("; ")
    );
    Ok(())
}

fn part_label(entry: &ExtPartEntry, idx: usize) -> String {
    match &entry.name {
        Some(name) => format!("part '{name}'"),
        None => format!("part entry {}", idx + 1),
    }
}
