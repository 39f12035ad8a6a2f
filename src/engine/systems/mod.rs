//! Bevy systems
//!
//! This module contains all the game systems that operate on entities
//! and resources in the Bevy ECS.

pub mod frame_extraction;
pub mod scene;
pub mod spin;
pub mod swap;

pub use frame_extraction::extract_and_process_frame;
pub use scene::setup_scene;
pub use spin::{spin_objects, sync_spin_playback};
pub use swap::cycle_materials;
