//! Jump resolution as an ordered table of guarded rules.
//!
//! Every tick the first rule whose predicate holds fires and the rest are
//! skipped. Predicates only read a [`JumpContext`], so the table can be
//! checked for overlaps without a physics world.

use bevy::prelude::*;

use super::orientation;
use crate::movement::{CharacterState, MovementTuning, PhysicsWorld};

/// The action a jump rule performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpAction {
    /// Jetpack owns vertical motion; nothing else runs.
    JetpackOverride,
    GroundJump,
    SustainedThrust,
    AirJump,
    WallJump,
    /// Grounded with no jump: counters and modes return to rest.
    Reset,
}

/// Everything a rule predicate may look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpContext {
    pub grounded: bool,
    pub walled: bool,
    pub jetpack_active: bool,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub rising: bool,
    pub air_jumps_left: bool,
}

impl JumpContext {
    pub fn capture(
        state: &CharacterState,
        tuning: &MovementTuning,
        velocity: Vec2,
        jump_held: bool,
        jump_pressed: bool,
    ) -> Self {
        Self {
            grounded: state.contact.grounded(),
            walled: state.contact.walled(),
            jetpack_active: state.jetpack_active,
            jump_pressed,
            jump_held,
            rising: velocity.y > 0.0,
            air_jumps_left: !state.air_jumps_exhausted(tuning.max_air_jumps),
        }
    }
}

pub struct JumpRule {
    pub action: JumpAction,
    pub applies: fn(&JumpContext) -> bool,
}

/// Rules in priority order.
pub const JUMP_RULES: [JumpRule; 6] = [
    JumpRule {
        action: JumpAction::JetpackOverride,
        applies: |ctx| ctx.jetpack_active,
    },
    JumpRule {
        action: JumpAction::GroundJump,
        applies: |ctx| ctx.grounded && ctx.jump_pressed,
    },
    JumpRule {
        action: JumpAction::SustainedThrust,
        applies: |ctx| ctx.jump_held && !ctx.jump_pressed && ctx.rising,
    },
    JumpRule {
        action: JumpAction::AirJump,
        applies: |ctx| !ctx.grounded && !ctx.walled && ctx.jump_pressed && ctx.air_jumps_left,
    },
    JumpRule {
        action: JumpAction::WallJump,
        applies: |ctx| !ctx.grounded && ctx.walled && ctx.jump_pressed,
    },
    JumpRule {
        action: JumpAction::Reset,
        applies: |ctx| ctx.grounded,
    },
];

/// First matching rule, or `None` when the tick has nothing to do
/// (including a press with no eligible jump, which is dropped).
pub fn select_jump_action(ctx: &JumpContext) -> Option<JumpAction> {
    JUMP_RULES
        .iter()
        .find(|rule| (rule.applies)(ctx))
        .map(|rule| rule.action)
}

pub(crate) fn jump(
    world: &mut impl PhysicsWorld,
    state: &mut CharacterState,
    tuning: &MovementTuning,
    jump_held: bool,
    jump_pressed: bool,
) -> Option<JumpAction> {
    let ctx = JumpContext::capture(state, tuning, world.velocity(), jump_held, jump_pressed);
    let action = select_jump_action(&ctx)?;
    apply(world, state, tuning, action);
    Some(action)
}

// Counters are written before velocities so a partially applied rule never
// leaves a launch without its bookkeeping.
fn apply(
    world: &mut impl PhysicsWorld,
    state: &mut CharacterState,
    tuning: &MovementTuning,
    action: JumpAction,
) {
    match action {
        JumpAction::JetpackOverride => {}
        JumpAction::GroundJump => {
            state.air_jump_count = tuning.max_air_jumps.min(1);
            state.ground_jump_active = true;
            world.apply_impulse(Vec2::new(0.0, tuning.ground_jump_impulse));
            debug!("Ground jump: air_jump_count={}", state.air_jump_count);
        }
        JumpAction::SustainedThrust => {
            world.apply_force(Vec2::new(0.0, tuning.sustained_jump_force));
        }
        JumpAction::AirJump => {
            state.air_jump_count = state
                .air_jump_count
                .saturating_add(1)
                .min(tuning.max_air_jumps);
            let velocity = world.velocity();
            world.set_velocity(Vec2::new(velocity.x, tuning.air_jump_velocity));
            debug!(
                "Air jump: air_jump_count={}/{}",
                state.air_jump_count, tuning.max_air_jumps
            );
        }
        JumpAction::WallJump => {
            // The character was facing into the wall.
            if state.contact.walled_front() {
                orientation::flip(state);
            }
            state.input_ignore_ticks_remaining = tuning.wall_jump_ignore_ticks;
            state.input_ramp_ticks_remaining = tuning.wall_jump_ramp_ticks;

            let velocity = world.velocity();
            world.set_velocity(Vec2::new(velocity.x, 0.0));
            world.apply_impulse(Vec2::new(0.0, tuning.wall_jump_vertical_impulse));
            let velocity = world.velocity();
            world.set_velocity(Vec2::new(
                state.facing.sign() * tuning.wall_jump_horizontal_speed,
                velocity.y,
            ));
            debug!(
                "Wall jump: facing={:?}, ignoring input for {} ticks",
                state.facing, state.input_ignore_ticks_remaining
            );
        }
        JumpAction::Reset => {
            if state.air_jump_count > 0 || state.jetpack_active {
                debug!(
                    "Landed: air_jump_count={} reset, jetpack_active={} cleared",
                    state.air_jump_count, state.jetpack_active
                );
            }
            state.air_jump_count = 0;
            state.jetpack_active = false;
            state.ground_jump_active = false;
        }
    }
}
