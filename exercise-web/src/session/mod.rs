//! Session module - stateful part of the pipeline
//!
//! Re-exports only. All logic in submodules.

mod engine;
mod feedback;
mod guard;
mod reps;
mod state;
mod still;

pub use engine::{Engine, Session};
pub use feedback::{coach, Cue};
pub use guard::{GuardDecision, TransitionGuard};
pub use reps::{RepMachine, RepPhase};
pub use state::{FrameOutput, SessionState};
pub use still::{analyze_still, StillAnalysis};
