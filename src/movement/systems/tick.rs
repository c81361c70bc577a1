//! Movement domain: controller attachment and the fixed-tick driver.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::physics::AvianWorld;
use crate::movement::{
    AnimationParams, CameraHint, CharacterController, MovementInput, MovementTuning, Player,
    ProbeKind, SensorLayout, TickInput,
};

/// Resolve sensor probes of newly spawned players and attach their controller.
/// A player that cannot be sensed is a fatal error.
pub(crate) fn attach_controllers(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    players: Query<(Entity, Option<&Children>), (With<Player>, Without<CharacterController>)>,
    probes: Query<(&ProbeKind, &Transform)>,
    mut exit: MessageWriter<AppExit>,
) {
    for (entity, children) in &players {
        let probe_offsets = children
            .into_iter()
            .flat_map(|children| children.iter())
            .filter_map(|child| probes.get(child).ok())
            .map(|(kind, transform)| (*kind, transform.translation.truncate()));

        let controller = SensorLayout::from_probes(probe_offsets)
            .and_then(|sensors| CharacterController::new(tuning.clone(), sensors));

        match controller {
            Ok(controller) => {
                info!(
                    "Controller attached: entity={}, max_air_jumps={}, jetpack={}",
                    entity, tuning.max_air_jumps, tuning.jetpack_enabled
                );
                commands
                    .entity(entity)
                    .insert((controller, AnimationParams::default()));
            }
            Err(e) => {
                error!("Cannot drive player {}: {}", entity, e);
                exit.write(AppExit::error());
            }
        }
    }
}

pub(crate) fn drive_characters(
    time: Res<Time>,
    gravity: Res<Gravity>,
    spatial_query: SpatialQuery,
    mut input: ResMut<MovementInput>,
    mut camera_hints: MessageWriter<CameraHint>,
    mut query: Query<
        (
            &Transform,
            &Mass,
            &mut LinearVelocity,
            &mut CharacterController,
            &mut AnimationParams,
        ),
        With<Player>,
    >,
) {
    // Consumes the latched press exactly once per tick.
    let tick_input = TickInput::sample(&mut *input);
    let dt = time.delta_secs();
    let gravity = gravity.0.length();

    for (transform, mass, mut velocity, mut controller, mut animation) in &mut query {
        let mut world = AvianWorld {
            spatial_query: &spatial_query,
            velocity: &mut *velocity,
            mass: mass.0.max(f32::EPSILON),
            gravity,
            dt,
        };
        controller.tick(
            &mut world,
            transform.translation.truncate(),
            &tick_input,
            &mut *animation,
            &mut camera_hints,
        );
    }
}
