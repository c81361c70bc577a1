//! Horizontal motion: crouch resolution, ground and air policies, input suppression.

use bevy::prelude::*;

use super::orientation;
use crate::movement::{CharacterState, MovementTuning, PhysicsWorld};

pub(crate) fn move_horizontal(
    world: &mut impl PhysicsWorld,
    state: &mut CharacterState,
    tuning: &MovementTuning,
    input: f32,
    crouch_held: bool,
) {
    // Staying down under a ceiling, even with crouch released.
    state.crouching = crouch_held || (state.crouching && state.contact.ceiling_blocked());

    let Some(input) = admit_input(state, tuning, input) else {
        if state.contact.grounded() {
            state.ground_speed = 0.0;
        }
        return;
    };

    if state.contact.grounded() {
        let input = if state.crouching {
            input * tuning.crouch_speed_multiplier
        } else {
            input
        };
        ground_move(world, state, tuning, input);
    } else {
        air_move(world, state, tuning, input);
    }
}

/// Applies the ignore window and the ramp-in that follows a wall jump.
/// Returns `None` while input is suppressed.
fn admit_input(state: &mut CharacterState, tuning: &MovementTuning, input: f32) -> Option<f32> {
    if state.input_ignore_ticks_remaining > 0 {
        state.input_ignore_ticks_remaining -= 1;
        return None;
    }

    if state.input_ramp_ticks_remaining > 0 {
        let ramp = tuning.wall_jump_ramp_ticks.max(state.input_ramp_ticks_remaining) as f32;
        let step = ramp - state.input_ramp_ticks_remaining as f32 + 1.0;
        state.input_ramp_ticks_remaining -= 1;
        return Some(input * step / (ramp + 1.0));
    }

    Some(input)
}

fn ground_move(
    world: &mut impl PhysicsWorld,
    state: &mut CharacterState,
    tuning: &MovementTuning,
    input: f32,
) {
    state.ground_speed = input.abs();
    let velocity = world.velocity();
    world.set_velocity(Vec2::new(input * tuning.max_ground_speed, velocity.y));
    orientation::face_input(state, input);
}

/// Steers without erasing jump momentum: a reversal stops horizontal motion,
/// then a share of the ground speed is added while under the speed cap.
fn air_move(
    world: &mut impl PhysicsWorld,
    state: &mut CharacterState,
    tuning: &MovementTuning,
    input: f32,
) {
    if tuning.air_control_factor == 0.0 {
        return;
    }

    let mut velocity = world.velocity();
    if state.facing.opposes(input) {
        velocity.x = 0.0;
    }
    if velocity.x.abs() < tuning.max_ground_speed {
        velocity.x += input * tuning.max_ground_speed * tuning.air_control_factor;
    }
    world.set_velocity(velocity);
    orientation::face_input(state, input);
}
