//! Tauri command handlers
//!
//! This module contains all the Tauri command functions that can be invoked
//! from the frontend JavaScript/TypeScript code.

use base64::{engine::general_purpose::STANDARD, Engine};
use tauri::State;

use super::shared_state::{
    FrameResponse, PerformanceStats, SharedControlInput, SharedFrameBuffer, SharedPerfStats,
};
use crate::config::{RENDER_HEIGHT, RENDER_WIDTH};

/// Get the current rendered frame as Base64-encoded RGBA data
#[tauri::command]
pub fn get_frame(
    state: State<SharedFrameBuffer>,
    perf_state: State<SharedPerfStats>,
) -> Result<FrameResponse, String> {
    let cmd_start = std::time::Instant::now();

    let guard = state.0.lock().map_err(|e| e.to_string())?;
    match &*guard {
        Some(rgba_data) => {
            let data_fetch_time = cmd_start.elapsed().as_secs_f64() * 1000.0;

            // Measure Base64 encoding time
            let encode_start = std::time::Instant::now();
            let base64_data = STANDARD.encode(rgba_data);
            let encode_time = encode_start.elapsed().as_secs_f64() * 1000.0;

            // Update perf stats
            if let Ok(mut stats) = perf_state.0.lock() {
                stats.tauri_get_frame_ms = data_fetch_time;
                stats.tauri_serialize_ms = encode_time;
            }

            Ok(FrameResponse {
                data: base64_data,
                width: RENDER_WIDTH,
                height: RENDER_HEIGHT,
            })
        }
        None => Err("No frame yet (scene still loading)".into()),
    }
}

/// Get the render resolution
#[tauri::command]
pub fn get_render_size() -> (u32, u32) {
    (RENDER_WIDTH, RENDER_HEIGHT)
}

/// Get performance statistics
#[tauri::command]
pub fn get_performance_stats(state: State<SharedPerfStats>) -> Result<PerformanceStats, String> {
    let guard = state.0.lock().map_err(|e| e.to_string())?;
    Ok(guard.clone())
}

/// Receive the raw swap-key state from the frontend
///
/// The frontend reports key transitions (down/up) as they happen; the
/// Bevy side compares consecutive states to fire the swap exactly once
/// per press-release cycle.
#[tauri::command]
pub fn send_key_input(state: State<SharedControlInput>, swap_held: bool) -> Result<(), String> {
    let mut guard = state.0.lock().map_err(|e| e.to_string())?;
    guard.swap_held = swap_held;
    Ok(())
}

/// Toggle continuous rotation playback
#[tauri::command]
pub fn set_playback(state: State<SharedControlInput>, playing: bool) -> Result<(), String> {
    let mut guard = state.0.lock().map_err(|e| e.to_string())?;
    guard.spin_playing = playing;
    Ok(())
}
