use avian2d::prelude::*;
use bevy::prelude::*;

use platformer_core::content::ContentPlugin;
use platformer_core::movement::{MovementPlugin, dev};

/// Fixed simulation rate for movement ticks.
const TICK_HZ: f64 = 60.0;

fn main() -> AppExit {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Platformer".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * 1800.0))
    .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
    .add_plugins((ContentPlugin::default(), MovementPlugin))
    .add_systems(Startup, (setup_camera, dev::spawn_test_room, dev::spawn_player));

    #[cfg(feature = "dev-tools")]
    app.add_systems(Update, dev::draw_apex_prediction);

    app.run()
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
