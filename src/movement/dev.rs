//! Movement domain: demo room, player spawn and debug-only drawing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Player, ProbeKind, SensorLayout};
#[cfg(feature = "dev-tools")]
use crate::movement::CharacterController;

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Gap between the body edge and the wall probe centers.
const WALL_PROBE_GAP: f32 = 2.0;

/// Spawn the player body with its four sensor probes as children.
pub fn spawn_player(mut commands: Commands) {
    let sensors = SensorLayout::for_body(PLAYER_SIZE * 0.5, WALL_PROBE_GAP);
    let probes = [
        (ProbeKind::Ground, sensors.ground),
        (ProbeKind::Ceiling, sensors.ceiling),
        (ProbeKind::WallFront, sensors.wall_front),
        (ProbeKind::WallBack, sensors.wall_back),
    ];

    commands
        .spawn((
            Player,
            Name::new("Player"),
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(0.0, 100.0, 0.0),
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Mass(1.0),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
            ),
        ))
        .with_children(|parent| {
            for (kind, offset) in probes {
                parent.spawn((
                    kind,
                    Name::new(kind.name()),
                    Transform::from_translation(offset.extend(0.0)),
                ));
            }
        });
}

fn spawn_block(
    commands: &mut Commands,
    layer: GameLayer,
    color: Color,
    center: Vec2,
    size: Vec2,
) {
    commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(layer, [GameLayer::Player]),
    ));
}

/// Floor, side walls, stepped platforms and a pillar for wall-jump practice.
pub fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let blocks = [
        (GameLayer::Ground, ground_color, Vec2::new(0.0, -200.0), Vec2::new(800.0, 40.0)),
        (GameLayer::Wall, wall_color, Vec2::new(-420.0, 50.0), Vec2::new(40.0, 500.0)),
        (GameLayer::Wall, wall_color, Vec2::new(420.0, 50.0), Vec2::new(40.0, 500.0)),
        (GameLayer::Ground, platform_color, Vec2::new(-250.0, -50.0), Vec2::new(150.0, 20.0)),
        (GameLayer::Ground, platform_color, Vec2::new(250.0, 50.0), Vec2::new(150.0, 20.0)),
        (GameLayer::Ground, platform_color, Vec2::new(0.0, 150.0), Vec2::new(120.0, 20.0)),
        (GameLayer::Wall, wall_color, Vec2::new(-100.0, -80.0), Vec2::new(30.0, 200.0)),
    ];

    for (layer, color, center, size) in blocks {
        spawn_block(&mut commands, layer, color, center, size);
    }
}

/// Draw where the feet and head would peak for a held ground jump.
#[cfg(feature = "dev-tools")]
pub fn draw_apex_prediction(
    mut gizmos: Gizmos,
    gravity: Res<Gravity>,
    mut rest_height: Local<Option<f32>>,
    query: Query<(&Transform, &Mass, &LinearVelocity, &CharacterController)>,
) {
    for (transform, mass, velocity, controller) in &query {
        let feet = transform.translation.y + controller.sensors().ground.y;
        if controller.state().contact.grounded() && velocity.y.abs() < f32::EPSILON {
            *rest_height = Some(feet);
        }

        let Some(apex) = controller
            .tuning()
            .predicted_apex_height(gravity.0.length(), mass.0)
        else {
            continue;
        };
        let Some(base) = *rest_height else {
            continue;
        };

        let x = transform.translation.x;
        let head = controller.sensors().ceiling.y - controller.sensors().ground.y;
        gizmos.line_2d(
            Vec2::new(x - 100.0, base + apex),
            Vec2::new(x + 100.0, base + apex),
            Color::srgb(1.0, 0.2, 0.2),
        );
        gizmos.line_2d(
            Vec2::new(x - 100.0, base + head + apex),
            Vec2::new(x + 100.0, base + head + apex),
            Color::srgb(0.2, 1.0, 0.2),
        );
    }
}
