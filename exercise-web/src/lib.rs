//! Exercise Web - camera-based exercise recognition and rep counting
//!
//! Entry point for the WASM module. Only contains:
//! - Module declarations
//! - Re-exports of the core API and the wasm_bindgen entry points

mod bridge;
pub mod classifier;
pub mod config;
pub mod error;
pub mod geometry;
pub mod pose;
pub mod session;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    analyze_photo, get_confidence, get_exercise, get_exercise_display_name, get_feedback,
    get_frame_report_json, get_hold_seconds, get_rep_count, is_session_active, reset_session,
    start_session, stop_session, update_pose, update_pose_now,
};

pub use classifier::{ExerciseLabel, FeatureSet};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use pose::{Joint, KeypointLayout, Landmark, PoseSnapshot};
pub use session::{Cue, Engine, FrameOutput, Session, SessionState, StillAnalysis};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("✅ Exercise engine v{} loaded", env!("CARGO_PKG_VERSION"));
}
