//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod session_integration;

pub use landmarks::{update_pose, update_pose_now};

pub use session_integration::{
    // Lifecycle
    start_session,
    stop_session,
    reset_session,
    is_session_active,
    // Getters
    get_exercise,
    get_exercise_display_name,
    get_rep_count,
    get_hold_seconds,
    get_confidence,
    get_feedback,
    get_frame_report_json,
    // Still image
    analyze_photo,
};
