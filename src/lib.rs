//! Spin & Swap: headless Bevy scene in a Tauri shell
//!
//! A cube spins continuously about its vertical axis and swaps between
//! two preset materials whenever the user releases the S key. The scene
//! renders headless (no window) and the frames are streamed to a Tauri
//! frontend, which also delivers the keyboard input.
//!
//! Architecture:
//! - Bevy runs in a background thread with NO window (true headless mode)
//! - Uses proper RenderGraph pipeline with ImageCopyDriver node
//! - GPU texture -> Buffer -> CPU channel -> Tauri frontend
//! - Frame data transferred via custom protocol (JPEG compression) or Base64-encoded RGBA
//! - Frontend reports raw key state; the Bevy side derives the swap trigger edge
//!
//! # Module Structure
//!
//! - `config`: Configuration constants and settings
//! - `tauri_bridge`: Bridge layer between Tauri and Bevy
//!   - `shared_state`: Thread-safe data structures
//!   - `commands`: Tauri command handlers
//!   - `protocol`: Custom protocol handlers
//! - `engine`: Bevy engine integration
//!   - `components`: ECS components (Spinner, MaterialCycler)
//!   - `resources`: Global resources
//!   - `plugins`: Custom plugins
//!   - `systems`: Game systems
//!   - `app`: Application setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Module declarations
pub mod config;
pub mod engine;
pub mod tauri_bridge;

use std::{thread, time::Duration};
use tauri_bridge::{SharedControlInput, SharedFrameBuffer, SharedPerfStats};

/// Main entry point for the Tauri application
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    println!("[Tauri] Starting...");

    // Create shared state
    let buffer = SharedFrameBuffer::default();
    let perf_stats = SharedPerfStats::default();
    let control_input = SharedControlInput::default();

    // Start Bevy in background thread
    engine::start_bevy(buffer.clone(), perf_stats.clone(), control_input.clone());

    // Wait for Bevy to initialize
    thread::sleep(Duration::from_millis(1000));

    // Clone for the custom protocol handler
    let protocol_buffer = buffer.clone();
    let protocol_perf_stats = perf_stats.clone();

    // Build and run Tauri application
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(buffer)
        .manage(perf_stats)
        .manage(control_input)
        // Register custom protocol "frame://" for direct binary transfer
        // This bypasses Tauri IPC JSON serialization completely!
        .register_asynchronous_uri_scheme_protocol("frame", move |_ctx, request, responder| {
            let buffer = protocol_buffer.clone();
            let perf_stats = protocol_perf_stats.clone();

            // Handle the request in a separate thread to avoid blocking
            std::thread::spawn(move || {
                let uri = request.uri();
                let path = uri.path();

                // For Tauri v2, URL format is: http://frame.localhost/path
                let response =
                    tauri_bridge::protocol::handle_frame_protocol(path, &buffer, &perf_stats);
                responder.respond(response);
            });
        })
        .invoke_handler(tauri::generate_handler![
            tauri_bridge::commands::get_frame,
            tauri_bridge::commands::get_render_size,
            tauri_bridge::commands::get_performance_stats,
            tauri_bridge::commands::send_key_input,
            tauri_bridge::commands::set_playback
        ])
        .run(tauri::generate_context!())
        .expect("Tauri error");
}
