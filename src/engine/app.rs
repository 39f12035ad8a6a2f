//! Bevy application setup and execution
//!
//! This module handles the creation and configuration of the Bevy app,
//! including plugin registration and system scheduling.

use bevy::{
    app::{App, ScheduleRunnerPlugin},
    prelude::*,
    window::ExitCondition,
};
use std::thread;
use std::time::Duration;

use crate::config::{PRE_ROLL_FRAMES, TARGET_FPS};
use crate::engine::plugins::ImageCopyPlugin;
use crate::engine::resources::*;
use crate::engine::systems::*;
use crate::tauri_bridge::shared_state::{SharedControlInput, SharedFrameBuffer, SharedPerfStats};

/// Create and configure the Bevy application
pub fn create_app(
    frame_buffer: SharedFrameBuffer,
    perf_stats: SharedPerfStats,
    control_input: SharedControlInput,
) -> App {
    let mut app = App::new();

    // Use DefaultPlugins but configure for headless operation
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: None,
                exit_condition: ExitCondition::DontExit,
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    );

    // Add schedule runner for controlled frame rate
    app.add_plugins(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
        1.0 / TARGET_FPS,
    )));

    // Add custom plugins
    app.add_plugins(ImageCopyPlugin);

    // Register systems. Playback sync runs before the spin so a pause
    // takes effect on the same frame it arrives.
    app.add_systems(Startup, setup_scene);
    app.add_systems(Update, (sync_spin_playback, spin_objects).chain());
    app.add_systems(Update, cycle_materials);
    app.add_systems(Last, extract_and_process_frame);

    // Insert resources
    app.insert_resource(FrameBufferRes(frame_buffer));
    app.insert_resource(PerfStatsRes(perf_stats));
    app.insert_resource(ControlInputRes(control_input));
    app.insert_resource(FrameCount::default());
    app.insert_resource(PreRollFrames(PRE_ROLL_FRAMES));
    app.insert_resource(FrameTimings::default());
    app.insert_resource(FrameRateLimiter::default());

    println!("[Bevy] App configured (headless mode with proper GPU-CPU pipeline)");
    app
}

/// Start Bevy in a background thread
pub fn start_bevy(
    buffer: SharedFrameBuffer,
    perf_stats: SharedPerfStats,
    control_input: SharedControlInput,
) {
    thread::spawn(move || {
        println!("[Bevy] Thread started");
        let mut app = create_app(buffer, perf_stats, control_input);
        println!("[Bevy] Running render loop...");
        app.run();
    });
}
