//! Material swap system
//!
//! Cycles the material applied to entities carrying a [`MaterialCycler`]
//! when the swap key reports a complete press-release cycle. The frontend
//! only ships the raw held state; the edge is derived here by comparing
//! against the state seen on the previous frame.

use bevy::{
    pbr::{MeshMaterial3d, StandardMaterial},
    prelude::*,
};

use crate::engine::components::MaterialCycler;
use crate::engine::resources::ControlInputRes;

/// Detects the key-up transition of the swap key
///
/// Fires exactly once per press-release cycle: holding the key across
/// many frames produces nothing until it is released.
#[derive(Default, Clone, Copy)]
pub struct SwapKeyEdge {
    was_held: bool,
}

impl SwapKeyEdge {
    /// Feed the current held state; returns true on the held -> released
    /// transition only.
    pub fn released(&mut self, held: bool) -> bool {
        let fired = self.was_held && !held;
        self.was_held = held;
        fired
    }
}

/// Advance and apply the next material variant on each swap trigger
pub fn cycle_materials(
    control_input: Option<Res<ControlInputRes>>,
    mut edge: Local<SwapKeyEdge>,
    mut query: Query<(&mut MaterialCycler, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    let Some(control) = control_input else {
        return;
    };
    let held = match control.0 .0.lock() {
        Ok(guard) => guard.swap_held,
        Err(_) => return,
    };

    if !edge.released(held) {
        return;
    }

    for (mut cycler, mut material) in query.iter_mut() {
        material.0 = cycler.advance().clone();
        println!("[Bevy] Swapped to material variant {}", cycler.cursor());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_press_release_cycle() {
        let mut edge = SwapKeyEdge::default();
        assert!(!edge.released(false)); // idle
        assert!(!edge.released(true)); // pressed
        assert!(!edge.released(true)); // still held
        assert!(edge.released(false)); // released -> fire
        assert!(!edge.released(false)); // idle again
    }

    #[test]
    fn holding_never_fires() {
        let mut edge = SwapKeyEdge::default();
        edge.released(true);
        for _ in 0..100 {
            assert!(!edge.released(true));
        }
    }

    #[test]
    fn consecutive_cycles_each_fire() {
        let mut edge = SwapKeyEdge::default();
        let mut fires = 0;
        for _ in 0..3 {
            edge.released(true);
            if edge.released(false) {
                fires += 1;
            }
        }
        assert_eq!(fires, 3);
    }
}
