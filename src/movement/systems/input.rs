//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

/// Runs every frame. Jump presses are latched until a fixed tick consumes them.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    input.horizontal = x;

    input.crouch_held = keyboard.pressed(KeyCode::ControlLeft)
        || keyboard.pressed(KeyCode::KeyS)
        || keyboard.pressed(KeyCode::ArrowDown);

    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK) {
        input.latch_jump_press();
    }
    input.jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);

    // The jetpack shares the jump button; it only engages once air jumps are spent.
    input.jetpack_held = input.jump_held;
}
