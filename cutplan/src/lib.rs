//! `cutplan` computes cutting layouts for rectangular parts on rectangular stock sheets:
//! per-sheet placements, merged guillotine cut lines, leftover (remnant) reuse and
//! edge-banding length requirements.
//!
//! The placement heuristic is a deterministic first-fit-decreasing shelf packer,
//! chosen for speed and predictable behavior rather than minimum-waste guarantees.
//! The entire pipeline is a pure function of ([`CutPlanInstance`](entities::CutPlanInstance),
//! [`CutPlanConfig`](config::CutPlanConfig)) with no hidden state and no I/O.

pub mod config;
pub mod entities;
pub mod io;
pub mod solver;
pub mod util;
