//! Build-side pipeline steps that prepare a deployment for checking
//!
//! - [`stage`]: publish the newest built wheel under its "latest" alias
//! - [`export`]: render notebooks to static HTML

pub mod export;
pub mod stage;

pub use export::{plan_exports, run_exports};
pub use stage::{StageStatus, stage_artifact};
