//! Content domain: data-driven movement tuning.

mod loader;

use bevy::prelude::*;
use std::path::PathBuf;

pub use loader::{ContentLoadError, load_tuning, parse_tuning};

use crate::movement::MovementTuning;

pub const DEFAULT_TUNING_PATH: &str = "assets/data/movement.ron";

/// Where tuning is read from at startup.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub tuning: PathBuf,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            tuning: PathBuf::from(DEFAULT_TUNING_PATH),
        }
    }
}

#[derive(Default)]
pub struct ContentPlugin {
    pub paths: ContentPaths,
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.paths.clone())
            .init_resource::<MovementTuning>()
            .add_systems(PreStartup, load_movement_tuning);
    }
}

/// A missing file keeps the defaults; an unreadable or invalid one stops the app.
fn load_movement_tuning(
    paths: Res<ContentPaths>,
    mut tuning: ResMut<MovementTuning>,
    mut exit: MessageWriter<AppExit>,
) {
    match load_tuning(&paths.tuning) {
        Ok(Some(loaded)) => {
            info!(
                "Movement tuning loaded from {}: max_air_jumps={}, jetpack={}",
                paths.tuning.display(),
                loaded.max_air_jumps,
                loaded.jetpack_enabled
            );
            *tuning = loaded;
        }
        Ok(None) => {
            warn!(
                "{} not found, using default movement tuning",
                paths.tuning.display()
            );
        }
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::error());
        }
    }
}
