//! Bevy component definitions
//!
//! This module contains the animated-scene components: the continuous
//! spinner and the keyboard-cycled material set, plus camera markers.

use bevy::pbr::StandardMaterial;
use bevy::prelude::*;

use crate::config::spinner::SPEED_MAX;

/// Marker component for the offscreen rendering camera
///
/// Entities with this component are cameras that render to an offscreen
/// texture instead of a window.
#[derive(Component)]
pub struct OffscreenCamera;

/// Spin direction about the vertical (Y) axis
///
/// Clockwise produces a positive per-frame angle, counterclockwise a
/// negative one, matching a top-down view of the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SpinDirection {
    Clockwise,
    #[default]
    Counterclockwise,
}

impl SpinDirection {
    pub fn sign(self) -> f32 {
        match self {
            SpinDirection::Clockwise => 1.0,
            SpinDirection::Counterclockwise => -1.0,
        }
    }
}

/// Continuous rotation about the local Y axis
///
/// `speed` is in degrees per second and is clamped to `[0, SPEED_MAX]`
/// when the component is constructed. `enabled` is the play toggle; a
/// disabled spinner contributes a zero rotation step every frame.
#[derive(Component, Clone, Copy, Debug)]
pub struct Spinner {
    speed: f32,
    pub direction: SpinDirection,
    pub enabled: bool,
}

impl Spinner {
    pub fn new(speed: f32, direction: SpinDirection) -> Self {
        Spinner {
            speed: speed.clamp(0.0, SPEED_MAX),
            direction,
            enabled: true,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Rotation step for one frame, in degrees. Zero while paused.
    pub fn step_degrees(&self, delta_secs: f32) -> f32 {
        if !self.enabled {
            return 0.0;
        }
        delta_secs * self.speed * self.direction.sign()
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Spinner::new(crate::config::spinner::DEFAULT_SPEED, SpinDirection::default())
    }
}

/// Ordered set of material variants with a cyclic cursor
///
/// Holds the fixed list of materials an entity can switch between and
/// the index of the one currently applied. The list is fixed at setup;
/// only the cursor moves afterwards, and it always stays in range.
#[derive(Component)]
pub struct MaterialCycler {
    variants: Vec<Handle<StandardMaterial>>,
    cursor: usize,
}

impl MaterialCycler {
    /// Build a cycler over `variants`, starting at index 0.
    ///
    /// An empty variant set is a fatal misconfiguration: the surface
    /// would have nothing to render, so construction is refused.
    pub fn new(variants: Vec<Handle<StandardMaterial>>) -> Result<Self, String> {
        if variants.is_empty() {
            return Err("material cycler requires at least one variant".into());
        }
        Ok(MaterialCycler {
            variants,
            cursor: 0,
        })
    }

    /// Handle of the currently selected variant
    pub fn current(&self) -> &Handle<StandardMaterial> {
        &self.variants[self.cursor]
    }

    /// Step to the next variant, wrapping past the end, and return it
    pub fn advance(&mut self) -> &Handle<StandardMaterial> {
        self.cursor = (self.cursor + 1) % self.variants.len();
        &self.variants[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::Assets;

    #[test]
    fn spinner_clamps_speed_to_ceiling() {
        let fast = Spinner::new(500.0, SpinDirection::Clockwise);
        assert_eq!(fast.speed(), SPEED_MAX);

        let negative = Spinner::new(-3.0, SpinDirection::Clockwise);
        assert_eq!(negative.speed(), 0.0);

        let in_range = Spinner::new(5.0, SpinDirection::Clockwise);
        assert_eq!(in_range.speed(), 5.0);
    }

    #[test]
    fn step_magnitude_is_dt_times_speed() {
        let spinner = Spinner::new(5.0, SpinDirection::Counterclockwise);
        assert_eq!(spinner.step_degrees(1.0), -5.0);
        assert_eq!(spinner.step_degrees(0.5), -2.5);
        assert_eq!(spinner.step_degrees(0.0), 0.0);

        let clockwise = Spinner::new(5.0, SpinDirection::Clockwise);
        assert_eq!(clockwise.step_degrees(1.0), 5.0);
    }

    #[test]
    fn paused_spinner_steps_zero() {
        let mut spinner = Spinner::new(12.0, SpinDirection::Clockwise);
        spinner.enabled = false;
        assert_eq!(spinner.step_degrees(2.0), 0.0);
        assert_eq!(spinner.step_degrees(100.0), 0.0);
    }

    fn two_variants() -> Vec<Handle<StandardMaterial>> {
        let mut materials = Assets::<StandardMaterial>::default();
        vec![
            materials.add(StandardMaterial::default()),
            materials.add(StandardMaterial::default()),
        ]
    }

    #[test]
    fn cycler_starts_at_first_variant() {
        let variants = two_variants();
        let cycler = MaterialCycler::new(variants.clone()).unwrap();
        assert_eq!(cycler.cursor(), 0);
        assert_eq!(cycler.current(), &variants[0]);
    }

    #[test]
    fn cycler_wraps_after_full_cycle() {
        let variants = two_variants();
        let mut cycler = MaterialCycler::new(variants.clone()).unwrap();

        assert_eq!(cycler.advance(), &variants[1]);
        assert_eq!(cycler.cursor(), 1);
        assert_eq!(cycler.advance(), &variants[0]);
        assert_eq!(cycler.cursor(), 0);
    }

    #[test]
    fn n_advances_return_to_start_for_any_n() {
        let mut materials = Assets::<StandardMaterial>::default();
        for n in 1..6 {
            let variants: Vec<_> = (0..n)
                .map(|_| materials.add(StandardMaterial::default()))
                .collect();
            let mut cycler = MaterialCycler::new(variants).unwrap();
            for _ in 0..n {
                cycler.advance();
            }
            assert_eq!(cycler.cursor(), 0, "cycle of length {n} did not wrap home");
        }
    }

    #[test]
    fn empty_variant_set_is_refused() {
        assert!(MaterialCycler::new(Vec::new()).is_err());
    }
}
