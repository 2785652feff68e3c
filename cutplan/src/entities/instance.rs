use crate::entities::{Part, Stock};
use crate::util::assertions;

/// Immutable snapshot of one packing run: the fully expanded part catalog and the stock descriptor.
#[derive(Clone, Debug)]
pub struct CutPlanInstance {
    /// All part instances to be placed, one per physical part, ids consecutive from 0
    pub parts: Vec<Part>,
    pub stock: Stock,
}

impl CutPlanInstance {
    pub fn new(parts: Vec<Part>, stock: Stock) -> Self {
        assert!(assertions::instance_part_ids_correct(&parts));
        Self { parts, stock }
    }

    pub fn part(&self, id: usize) -> &Part {
        &self.parts[id]
    }

    pub fn total_part_qty(&self) -> usize {
        self.parts.len()
    }

    pub fn total_part_area(&self) -> f32 {
        self.parts.iter().map(|p| p.area()).sum()
    }
}
