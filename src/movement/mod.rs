//! Movement domain: platformer traversal for player characters.
//!
//! `controller` holds the deterministic decision core; `systems` binds it to
//! Bevy input, avian2d physics and presentation.

mod backend;
mod components;
pub mod controller;
pub mod dev;
mod error;
mod resources;
pub mod systems;

#[cfg(test)]
mod test_support;

use bevy::prelude::*;

pub use backend::{
    AnimationFrame, AnimationSink, CameraHint, CameraHintSink, InputSource, PhysicsWorld,
    SurfaceMask, TickInput,
};
pub use components::{
    AnimationParams, CharacterState, Contact, Facing, GameLayer, Player, ProbeKind,
};
pub use controller::{CharacterController, JumpAction, SensorLayout};
pub use error::ControllerError;
pub use resources::{MovementInput, MovementTuning};
pub use systems::CameraTracking;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<CameraTracking>()
            .add_message::<CameraHint>()
            .add_systems(Update, systems::read_input)
            .add_systems(Update, systems::attach_controllers)
            .add_systems(FixedUpdate, systems::drive_characters)
            .add_systems(Update, (systems::sync_facing, systems::follow_player));
    }
}
