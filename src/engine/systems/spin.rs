//! Continuous rotation system
//!
//! Applies the per-frame spin step to every entity carrying a [`Spinner`],
//! and keeps each spinner's play toggle in sync with the frontend.

use bevy::{prelude::*, time::Time};

use crate::engine::components::Spinner;
use crate::engine::resources::ControlInputRes;

/// Rotate all spinning entities about their local Y axis
///
/// The step is `dt * speed` degrees, signed by the configured direction,
/// composed after the entity's existing orientation (local frame). A
/// paused spinner contributes nothing, so the system is a no-op for it.
pub fn spin_objects(time: Res<Time>, mut query: Query<(&mut Transform, &Spinner)>) {
    let dt = time.delta_secs();
    for (mut transform, spinner) in query.iter_mut() {
        let step = spinner.step_degrees(dt);
        if step != 0.0 {
            transform.rotate_local_y(step.to_radians());
        }
    }
}

/// Copy the frontend playback toggle onto every spinner
pub fn sync_spin_playback(
    control_input: Option<Res<ControlInputRes>>,
    mut query: Query<&mut Spinner>,
) {
    let Some(control) = control_input else {
        return;
    };
    let playing = match control.0 .0.lock() {
        Ok(guard) => guard.spin_playing,
        Err(_) => return,
    };
    for mut spinner in query.iter_mut() {
        if spinner.enabled != playing {
            spinner.enabled = playing;
        }
    }
}
