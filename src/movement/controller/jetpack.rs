use bevy::prelude::*;

use crate::movement::{CharacterState, MovementTuning, PhysicsWorld};

/// Jetpack activation and hover. Only reachable once the air jumps are spent.
pub(crate) fn jetpack(
    world: &mut impl PhysicsWorld,
    state: &mut CharacterState,
    tuning: &MovementTuning,
    jetpack_held: bool,
) {
    if state.jetpack_active && (state.contact.grounded() || !jetpack_held) {
        // Leaves the air jump count alone; only the grounded reset clears it.
        state.jetpack_active = false;
        debug!("Jetpack off: grounded={}", state.contact.grounded());
        return;
    }

    if !state.jetpack_active
        && tuning.jetpack_enabled
        && jetpack_held
        && !state.contact.grounded()
        && state.air_jumps_exhausted(tuning.max_air_jumps)
    {
        state.jetpack_active = true;
        state.ground_jump_active = false;
        debug!("Jetpack on: air_jump_count={}", state.air_jump_count);
    }

    if state.jetpack_active {
        let velocity = world.velocity();
        world.set_velocity(Vec2::new(velocity.x, tuning.jetpack_thrust_velocity));
    }
}
