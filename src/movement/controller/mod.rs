//! Movement and jump decision core.
//!
//! One [`CharacterController`] per character. Each fixed tick runs, in order:
//! sensing, horizontal motion, jetpack, jump resolution, then publishes the
//! animation frame and camera hint. All stages share the controller's
//! [`CharacterState`].

mod horizontal;
mod jetpack;
mod jump;
mod orientation;
mod sensing;

use bevy::prelude::*;

pub use jump::{JUMP_RULES, JumpAction, JumpContext, JumpRule, select_jump_action};
pub use sensing::SensorLayout;

use crate::movement::{
    AnimationFrame, AnimationSink, CameraHint, CameraHintSink, CharacterState, Contact,
    ControllerError, MovementTuning, PhysicsWorld, TickInput,
};

#[derive(Component, Debug, Clone)]
pub struct CharacterController {
    state: CharacterState,
    tuning: MovementTuning,
    sensors: SensorLayout,
}

impl CharacterController {
    pub fn new(tuning: MovementTuning, sensors: SensorLayout) -> Result<Self, ControllerError> {
        tuning.validate()?;
        Ok(Self {
            state: CharacterState::default(),
            tuning,
            sensors,
        })
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut CharacterState {
        &mut self.state
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn sensors(&self) -> &SensorLayout {
        &self.sensors
    }

    /// Refresh the contact snapshot. Must run before the other stages each tick.
    pub fn sense(&mut self, world: &impl PhysicsWorld, position: Vec2) -> Contact {
        self.state.contact = sensing::sense(
            world,
            position,
            self.state.facing,
            &self.sensors,
            &self.tuning,
        );
        self.state.contact
    }

    pub fn move_horizontal(
        &mut self,
        world: &mut impl PhysicsWorld,
        input: f32,
        crouch_held: bool,
    ) {
        horizontal::move_horizontal(
            world,
            &mut self.state,
            &self.tuning,
            input.clamp(-1.0, 1.0),
            crouch_held,
        );
    }

    pub fn jump(
        &mut self,
        world: &mut impl PhysicsWorld,
        jump_held: bool,
        jump_pressed: bool,
    ) -> Option<JumpAction> {
        jump::jump(world, &mut self.state, &self.tuning, jump_held, jump_pressed)
    }

    pub fn jetpack(&mut self, world: &mut impl PhysicsWorld, jetpack_held: bool) {
        jetpack::jetpack(world, &mut self.state, &self.tuning, jetpack_held);
    }

    /// Run one full fixed tick and publish its presentation outputs.
    pub fn tick(
        &mut self,
        world: &mut impl PhysicsWorld,
        position: Vec2,
        input: &TickInput,
        animation: &mut impl AnimationSink,
        camera: &mut impl CameraHintSink,
    ) -> Option<JumpAction> {
        self.sense(world, position);
        self.move_horizontal(world, input.horizontal, input.crouch_held);
        // A fresh press belongs to the jump rules. The jetpack may keep running
        // through it but only engages on a later held tick.
        let jetpack_held =
            input.jetpack_held && (self.state.jetpack_active || !input.jump_pressed);
        self.jetpack(world, jetpack_held);
        let action = self.jump(world, input.jump_held, input.jump_pressed);

        let velocity = world.velocity();
        animation.publish(AnimationFrame {
            grounded: self.state.contact.grounded() && action != Some(JumpAction::GroundJump),
            crouching: self.state.crouching,
            speed: self.state.ground_speed,
            vertical_speed: velocity.y,
        });
        camera.hint(if self.state.ground_jump_active {
            CameraHint::StopVertical
        } else {
            CameraHint::StartVertical
        });

        action
    }

    /// Apex of a held ground jump in the world's current gravity, if it has one.
    pub fn predicted_apex_height(&self, world: &impl PhysicsWorld) -> Option<f32> {
        self.tuning
            .predicted_apex_height(world.gravity_magnitude(), world.mass())
    }

    /// Ignore horizontal input for the next `ticks` ticks.
    pub fn suppress_input(&mut self, ticks: u32) {
        self.state.input_ignore_ticks_remaining = ticks;
    }

    /// Clear counters and modes, e.g. on respawn.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
