//! Session integration - owns the running session for the page
//!
//! Start/stop/reset map to the camera and reset buttons. Getters expose the
//! last frame's output for the UI. The pose model and drawing stay in
//! JavaScript.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use super::landmarks::parse_snapshot;
use crate::config::EngineConfig;
use crate::pose::PoseSnapshot;
use crate::session::{FrameOutput, Session};

/// Feedback shown while no session is running
const STOPPED_FEEDBACK: &str = "Camera off. You can upload a photo for analysis.";

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

fn with_output<T>(default: T, read: impl FnOnce(&FrameOutput) -> T) -> T {
    SESSION.with(|cell| cell.borrow().as_ref().map_or(default, |s| read(s.output())))
}

// ============================================================================
// SESSION LIFECYCLE
// ============================================================================

/// Start a fresh session (camera turned on)
///
/// `config_json` may override any subset of the thresholds.
#[wasm_bindgen]
pub fn start_session(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json.as_deref() {
        Some(text) => EngineConfig::from_json(text)?,
        None => EngineConfig::default(),
    };
    let session = Session::start(config, js_sys::Date::now())?;
    SESSION.with(|cell| *cell.borrow_mut() = Some(session));
    web_sys::console::log_1(&"✅ Exercise session started".into());
    Ok(())
}

/// Drop the session (camera turned off)
#[wasm_bindgen]
pub fn stop_session() {
    SESSION.with(|cell| *cell.borrow_mut() = None);
    web_sys::console::log_1(&"⏹️ Exercise session stopped".into());
}

/// Zero counters and forget the current exercise
#[wasm_bindgen]
pub fn reset_session() {
    SESSION.with(|cell| {
        if let Some(session) = cell.borrow_mut().as_mut() {
            session.reset(js_sys::Date::now());
        }
    });
}

#[wasm_bindgen]
pub fn is_session_active() -> bool {
    SESSION.with(|cell| cell.borrow().is_some())
}

// ============================================================================
// OUTPUT GETTERS
// ============================================================================

#[wasm_bindgen]
pub fn get_exercise() -> String {
    with_output("none".to_string(), |o| o.committed_exercise.as_str().to_string())
}

#[wasm_bindgen]
pub fn get_exercise_display_name() -> String {
    with_output("Camera off".to_string(), |o| {
        let label = o.committed_exercise;
        if label.is_none() {
            "Detecting exercise...".to_string()
        } else {
            format!("{} {}", label.icon(), label.display_name())
        }
    })
}

#[wasm_bindgen]
pub fn get_rep_count() -> u32 {
    with_output(0, |o| o.rep_count)
}

#[wasm_bindgen]
pub fn get_hold_seconds() -> u32 {
    with_output(0, |o| o.hold_seconds)
}

/// Mean landmark visibility of the last frame, 0-1
#[wasm_bindgen]
pub fn get_confidence() -> f32 {
    with_output(0.0, |o| o.confidence)
}

#[wasm_bindgen]
pub fn get_feedback() -> String {
    with_output(STOPPED_FEEDBACK.to_string(), |o| o.feedback.clone())
}

/// Full output of the last frame as JSON (debug overlay)
#[wasm_bindgen]
pub fn get_frame_report_json() -> Result<String, JsValue> {
    SESSION.with(|cell| match cell.borrow().as_ref() {
        Some(session) => serde_json::to_string(session.output())
            .map_err(|err| JsValue::from_str(&err.to_string())),
        None => Ok("null".to_string()),
    })
}

// ============================================================================
// STILL IMAGE
// ============================================================================

/// Classify an uploaded photo; returns a JSON report
///
/// Uses the running session's thresholds when there is one, defaults
/// otherwise. Never touches the session state.
#[wasm_bindgen]
pub fn analyze_photo(data: &[f32]) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(data, js_sys::Date::now())?;
    let analysis = SESSION.with(|cell| match cell.borrow().as_ref() {
        Some(session) => session.engine().analyze_still(&snapshot),
        None => crate::session::analyze_still(&snapshot, &EngineConfig::default()),
    });
    serde_json::to_string(&analysis).map_err(|err| JsValue::from_str(&err.to_string()))
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Feed one snapshot to the running session (called from update_pose)
pub(crate) fn push_snapshot(snapshot: &PoseSnapshot) {
    SESSION.with(|cell| match cell.borrow_mut().as_mut() {
        Some(session) => {
            session.push(snapshot);
        }
        None => {
            web_sys::console::warn_1(&"Pose received without an active session".into());
        }
    });
}
