//! Behavior tests for the spinning cube and the material swap
//!
//! These drive the real Update systems inside a bare Bevy `App` with a
//! manually advanced `Time`, so no GPU, window, or Tauri shell is needed.

use std::time::Duration;

use bevy::asset::Assets;
use bevy::math::Quat;
use bevy::pbr::{MeshMaterial3d, StandardMaterial};
use bevy::prelude::*;

use tauri_spin_swap_lib::engine::components::{MaterialCycler, SpinDirection, Spinner};
use tauri_spin_swap_lib::engine::resources::ControlInputRes;
use tauri_spin_swap_lib::engine::systems::{cycle_materials, spin_objects, sync_spin_playback};
use tauri_spin_swap_lib::tauri_bridge::shared_state::SharedControlInput;

fn test_app(control: SharedControlInput) -> App {
    let mut app = App::new();
    app.insert_resource(Time::<()>::default());
    app.insert_resource(ControlInputRes(control));
    app.add_systems(Update, (sync_spin_playback, spin_objects).chain());
    app.add_systems(Update, cycle_materials);
    app
}

fn tick(app: &mut App, dt: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(dt));
    app.update();
}

fn yaw_degrees(rotation: Quat) -> f32 {
    rotation.to_scaled_axis().y.to_degrees()
}

#[test]
fn one_second_at_speed_five_counterclockwise_is_minus_five_degrees() {
    let mut app = test_app(SharedControlInput::default());
    let cube = app
        .world_mut()
        .spawn((
            Transform::default(),
            Spinner::new(5.0, SpinDirection::Counterclockwise),
        ))
        .id();

    tick(&mut app, 1.0);

    let rotation = app.world().get::<Transform>(cube).unwrap().rotation;
    let expected = Quat::from_rotation_y((-5.0f32).to_radians());
    assert!(
        rotation.angle_between(expected) < 1e-4,
        "expected -5 degrees about Y, got {} degrees",
        yaw_degrees(rotation)
    );
}

#[test]
fn rotation_accumulates_monotonically_in_the_configured_direction() {
    let mut app = test_app(SharedControlInput::default());
    let cube = app
        .world_mut()
        .spawn((
            Transform::default(),
            Spinner::new(5.0, SpinDirection::Counterclockwise),
        ))
        .id();

    let mut previous_yaw = 0.0f32;
    for frame in 1..=10 {
        tick(&mut app, 0.5);
        let yaw = yaw_degrees(app.world().get::<Transform>(cube).unwrap().rotation);
        assert!(
            yaw < previous_yaw,
            "yaw should keep decreasing, frame {frame}: {yaw} vs {previous_yaw}"
        );
        previous_yaw = yaw;
    }
    // 10 frames * 0.5s * 5 deg/s counterclockwise
    assert!((previous_yaw - (-25.0)).abs() < 1e-3);
}

#[test]
fn clockwise_spins_the_other_way() {
    let mut app = test_app(SharedControlInput::default());
    let cube = app
        .world_mut()
        .spawn((Transform::default(), Spinner::new(5.0, SpinDirection::Clockwise)))
        .id();

    tick(&mut app, 1.0);

    let yaw = yaw_degrees(app.world().get::<Transform>(cube).unwrap().rotation);
    assert!((yaw - 5.0).abs() < 1e-3);
}

#[test]
fn pausing_playback_freezes_the_spinner() {
    let control = SharedControlInput::default();
    let mut app = test_app(control.clone());
    let cube = app
        .world_mut()
        .spawn((
            Transform::default(),
            Spinner::new(5.0, SpinDirection::Counterclockwise),
        ))
        .id();

    tick(&mut app, 1.0);
    let frozen = app.world().get::<Transform>(cube).unwrap().rotation;

    control.0.lock().unwrap().spin_playing = false;
    for _ in 0..5 {
        tick(&mut app, 1.0);
    }
    assert_eq!(app.world().get::<Transform>(cube).unwrap().rotation, frozen);

    // Resuming picks up where it left off
    control.0.lock().unwrap().spin_playing = true;
    tick(&mut app, 1.0);
    assert_ne!(app.world().get::<Transform>(cube).unwrap().rotation, frozen);
}

#[test]
fn swap_applies_next_variant_once_per_press_release_cycle() {
    let control = SharedControlInput::default();
    let mut app = test_app(control.clone());

    let mut materials = Assets::<StandardMaterial>::default();
    let disney = materials.add(StandardMaterial::default());
    let plain = materials.add(StandardMaterial::default());

    let cycler = MaterialCycler::new(vec![disney.clone(), plain.clone()]).unwrap();
    let cube = app
        .world_mut()
        .spawn((MeshMaterial3d(cycler.current().clone()), cycler))
        .id();

    let applied = |app: &App| {
        app.world()
            .get::<MeshMaterial3d<StandardMaterial>>(cube)
            .unwrap()
            .0
            .clone()
    };

    // Variant 0 is applied before any input
    assert_eq!(applied(&app), disney);

    // Press and hold across several frames: nothing happens yet
    control.0.lock().unwrap().swap_held = true;
    for _ in 0..4 {
        tick(&mut app, 0.016);
        assert_eq!(applied(&app), disney);
    }

    // Release: exactly one swap
    control.0.lock().unwrap().swap_held = false;
    tick(&mut app, 0.016);
    assert_eq!(applied(&app), plain);

    // Idle frames change nothing further
    tick(&mut app, 0.016);
    assert_eq!(applied(&app), plain);

    // Second press-release cycle wraps back to the first variant
    control.0.lock().unwrap().swap_held = true;
    tick(&mut app, 0.016);
    control.0.lock().unwrap().swap_held = false;
    tick(&mut app, 0.016);
    assert_eq!(applied(&app), disney);
}
