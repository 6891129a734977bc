//! Landmark ingestion from JavaScript
//!
//! Receives pose landmarks as a flat Float32Array and hands them to the
//! running session as a `PoseSnapshot`.

use wasm_bindgen::prelude::*;

use super::session_integration::push_snapshot;
use crate::pose::PoseSnapshot;

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript once per detected pose
///
/// `data` is `[x, y, visibility] × N` with N = 33 (MediaPipe) or
/// 17 (PoseNet). Pass an empty array when no person was found so the
/// session can notice the absence.
#[wasm_bindgen]
pub fn update_pose(data: &[f32], timestamp_ms: f64) -> Result<(), JsValue> {
    let snapshot = parse_snapshot(data, timestamp_ms)?;
    push_snapshot(&snapshot);
    Ok(())
}

/// Same as `update_pose`, stamped with `Date.now()`
#[wasm_bindgen]
pub fn update_pose_now(data: &[f32]) -> Result<(), JsValue> {
    update_pose(data, js_sys::Date::now())
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Parse a flat landmark array, warning on the console when it is malformed
pub(crate) fn parse_snapshot(data: &[f32], timestamp_ms: f64) -> Result<PoseSnapshot, JsValue> {
    PoseSnapshot::from_flat(data, timestamp_ms).map_err(|err| {
        web_sys::console::warn_1(&format!("Invalid landmark data: {err}").into());
        JsValue::from(err)
    })
}
