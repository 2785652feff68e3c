mod instance;
mod layout;
mod part;
mod remnant;
mod solution;
mod stock;

#[doc(inline)]
pub use instance::CutPlanInstance;
#[doc(inline)]
pub use layout::{CutLine, Layout, LayoutSource, PlacedPart};
#[doc(inline)]
pub use part::{EdgeBanding, Part, Side};
#[doc(inline)]
pub use remnant::{Remnant, RemnantSide};
#[doc(inline)]
pub use solution::{CutDirection, CutPlanSolution, PartBanding, PlanStep};
#[doc(inline)]
pub use stock::Stock;
