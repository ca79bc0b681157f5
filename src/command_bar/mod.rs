//! Command bar module orchestrator.
//!
//! The decorative title/command bar is materialized lazily by the active
//! strategy and owned by the screen; both sides observe one shared state
//! cell.

mod core;

pub use core::{BarState, CommandBar, SharedBarState};
