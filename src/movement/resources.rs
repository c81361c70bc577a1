//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{ControllerError, InputSource};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub max_ground_speed: f32,
    /// Share of `max_ground_speed` applied while crouching on the ground.
    pub crouch_speed_multiplier: f32,
    /// Share of `max_ground_speed` added per tick of air steering. 0 disables steering.
    pub air_control_factor: f32,
    /// Air actions available per airborne phase; the ground jump uses the first.
    pub max_air_jumps: u32,
    pub ground_jump_impulse: f32,
    /// Upward force applied each tick jump is held while rising.
    pub sustained_jump_force: f32,
    pub air_jump_velocity: f32,
    pub wall_jump_vertical_impulse: f32,
    pub wall_jump_horizontal_speed: f32,
    pub jetpack_enabled: bool,
    pub jetpack_thrust_velocity: f32,
    pub wall_jump_ignore_ticks: u32,
    /// Ticks over which input is ramped back in once the ignore window ends.
    pub wall_jump_ramp_ticks: u32,
    pub ground_probe_radius: f32,
    pub ceiling_probe_radius: f32,
    pub wall_probe_half_width: f32,
    pub wall_probe_half_height: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_ground_speed: 320.0,
            crouch_speed_multiplier: 0.36,
            air_control_factor: 0.2,
            max_air_jumps: 3,
            ground_jump_impulse: 680.0,
            sustained_jump_force: 900.0,
            air_jump_velocity: 620.0,
            wall_jump_vertical_impulse: 600.0,
            wall_jump_horizontal_speed: 400.0,
            jetpack_enabled: true,
            jetpack_thrust_velocity: 200.0,
            wall_jump_ignore_ticks: 15,
            wall_jump_ramp_ticks: 3,
            ground_probe_radius: 4.0,
            ceiling_probe_radius: 2.0,
            wall_probe_half_width: 2.0,
            wall_probe_half_height: 12.0,
        }
    }
}

impl MovementTuning {
    /// Reject values the controller cannot run with. Nothing is clamped.
    pub fn validate(&self) -> Result<(), ControllerError> {
        let non_negative = [
            ("max_ground_speed", self.max_ground_speed),
            ("ground_jump_impulse", self.ground_jump_impulse),
            ("sustained_jump_force", self.sustained_jump_force),
            ("air_jump_velocity", self.air_jump_velocity),
            ("wall_jump_vertical_impulse", self.wall_jump_vertical_impulse),
            ("wall_jump_horizontal_speed", self.wall_jump_horizontal_speed),
            ("jetpack_thrust_velocity", self.jetpack_thrust_velocity),
            ("ground_probe_radius", self.ground_probe_radius),
            ("ceiling_probe_radius", self.ceiling_probe_radius),
            ("wall_probe_half_width", self.wall_probe_half_width),
            ("wall_probe_half_height", self.wall_probe_half_height),
        ];
        for (field, value) in non_negative {
            check_finite(field, value)?;
            if value < 0.0 {
                return Err(ControllerError::Negative { field, value });
            }
        }

        let unit_range = [
            ("crouch_speed_multiplier", self.crouch_speed_multiplier),
            ("air_control_factor", self.air_control_factor),
        ];
        for (field, value) in unit_range {
            check_finite(field, value)?;
            if !(0.0..=1.0).contains(&value) {
                return Err(ControllerError::OutOfUnitRange { field, value });
            }
        }

        Ok(())
    }

    /// Apex of a ground jump with jump held the whole ascent, above the take-off point.
    ///
    /// Uses h = v0² / (2 (g - F/m)), where `F` is the sustained jump force.
    /// Returns `None` when the sustained force outweighs gravity.
    pub fn predicted_apex_height(&self, gravity: f32, mass: f32) -> Option<f32> {
        if mass <= 0.0 {
            return None;
        }
        let launch_speed = self.ground_jump_impulse / mass;
        let deceleration = gravity - self.sustained_jump_force / mass;
        if deceleration <= 0.0 {
            return None;
        }
        Some(launch_speed * launch_speed / (2.0 * deceleration))
    }
}

fn check_finite(field: &'static str, value: f32) -> Result<(), ControllerError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ControllerError::NonFinite { field, value })
    }
}

/// Player intent gathered at frame rate and consumed at the fixed tick rate.
///
/// A jump press seen by any frame stays latched until a fixed tick reads it.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub horizontal: f32,
    pub crouch_held: bool,
    pub jump_held: bool,
    pub jetpack_held: bool,
    jump_press_latched: bool,
}

impl MovementInput {
    pub fn latch_jump_press(&mut self) {
        self.jump_press_latched = true;
    }

    pub fn jump_press_pending(&self) -> bool {
        self.jump_press_latched
    }
}

impl InputSource for MovementInput {
    fn horizontal_axis(&self) -> f32 {
        self.horizontal
    }

    fn crouch_held(&self) -> bool {
        self.crouch_held
    }

    fn jump_pressed_edge(&mut self) -> bool {
        std::mem::take(&mut self.jump_press_latched)
    }

    fn jump_held(&self) -> bool {
        self.jump_held
    }

    fn jetpack_held(&self) -> bool {
        self.jetpack_held
    }
}
