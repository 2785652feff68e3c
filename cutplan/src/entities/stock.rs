/// Describes the stock sheets available for one run.
/// All sheets share the same dimensions, kerf and edge offset.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Stock {
    pub width: f32,
    pub length: f32,
    /// Number of sheets available
    pub quantity: usize,
    /// Material consumed by the cutting tool, reserved between adjacent parts
    pub kerf: f32,
    /// Margin reserved on all four sides of every sheet
    pub edge_offset: f32,
    /// Whether the material has a grain direction
    pub grain_enabled: bool,
}

impl Stock {
    pub fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.edge_offset
    }

    pub fn usable_length(&self) -> f32 {
        self.length - 2.0 * self.edge_offset
    }

    /// Area of a single sheet available for placements, inside the edge offsets.
    pub fn usable_area(&self) -> f32 {
        self.usable_width() * self.usable_length()
    }
}
