//! Movement domain: sinks for animation and camera hints, sprite facing.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::{
    AnimationFrame, AnimationParams, AnimationSink, CameraHint, CameraHintSink,
    CharacterController, Player,
};

impl Message for CameraHint {}

impl AnimationSink for AnimationParams {
    fn publish(&mut self, frame: AnimationFrame) {
        self.0 = frame;
    }
}

impl CameraHintSink for MessageWriter<'_, CameraHint> {
    fn hint(&mut self, hint: CameraHint) {
        self.write(hint);
    }
}

pub(crate) fn sync_facing(
    mut query: Query<(&CharacterController, &mut Sprite), Changed<CharacterController>>,
) {
    for (controller, mut sprite) in &mut query {
        let flip_x = !controller.state().facing_right();
        if sprite.flip_x != flip_x {
            sprite.flip_x = flip_x;
        }
    }
}

/// Whether the camera currently follows the player vertically.
#[derive(Resource, Debug)]
pub struct CameraTracking {
    pub vertical: bool,
    pub smoothing: f32,
}

impl Default for CameraTracking {
    fn default() -> Self {
        Self {
            vertical: true,
            smoothing: 8.0,
        }
    }
}

pub(crate) fn follow_player(
    time: Res<Time>,
    mut hints: MessageReader<CameraHint>,
    mut tracking: ResMut<CameraTracking>,
    player: Query<&Transform, With<Player>>,
    mut camera: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    if let Some(hint) = hints.read().last() {
        tracking.vertical = *hint == CameraHint::StartVertical;
    }

    let Ok(player) = player.single() else {
        return;
    };
    let Ok(mut camera) = camera.single_mut() else {
        return;
    };

    let t = (tracking.smoothing * time.delta_secs()).min(1.0);
    camera.translation.x += (player.translation.x - camera.translation.x) * t;
    if tracking.vertical {
        camera.translation.y += (player.translation.y - camera.translation.y) * t;
    }
}
