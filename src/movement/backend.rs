//! Collaborator seams of the movement core.
//!
//! The controller never owns the physics body, the input device or the
//! presentation layer. Hosts hand it implementations of these traits for the
//! duration of one fixed tick; the avian2d/Bevy implementations live in
//! `movement::systems`.

use bevy::prelude::*;

/// Collision mask a sensor probe is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceMask {
    Ground,
    Wall,
}

/// Physics capabilities consumed by the controller.
pub trait PhysicsWorld {
    /// Whether a circle overlaps any collider on `mask`.
    fn query_circle_overlap(&self, center: Vec2, radius: f32, mask: SurfaceMask) -> bool;

    /// Whether the axis-aligned rectangle spanned by two corners overlaps any
    /// collider on `mask`.
    fn query_rect_overlap(&self, corner_a: Vec2, corner_b: Vec2, mask: SurfaceMask) -> bool;

    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);

    /// Instantaneous change in momentum.
    fn apply_impulse(&mut self, impulse: Vec2);

    /// Force applied over the current physics step.
    fn apply_force(&mut self, force: Vec2);

    fn gravity_magnitude(&self) -> f32;

    fn mass(&self) -> f32;
}

/// Player intent for one fixed tick.
pub trait InputSource {
    /// Horizontal axis in `[-1, 1]`.
    fn horizontal_axis(&self) -> f32;

    fn crouch_held(&self) -> bool;

    /// True exactly once per physical press. Reading it consumes the press.
    fn jump_pressed_edge(&mut self) -> bool;

    fn jump_held(&self) -> bool;

    fn jetpack_held(&self) -> bool;
}

/// Snapshot of an [`InputSource`] taken once per fixed tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub horizontal: f32,
    pub crouch_held: bool,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub jetpack_held: bool,
}

impl TickInput {
    pub fn sample(source: &mut impl InputSource) -> Self {
        Self {
            horizontal: source.horizontal_axis().clamp(-1.0, 1.0),
            crouch_held: source.crouch_held(),
            jump_pressed: source.jump_pressed_edge(),
            jump_held: source.jump_held(),
            jetpack_held: source.jetpack_held(),
        }
    }
}

/// Animation parameters published once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationFrame {
    pub grounded: bool,
    pub crouching: bool,
    pub speed: f32,
    pub vertical_speed: f32,
}

pub trait AnimationSink {
    fn publish(&mut self, frame: AnimationFrame);
}

/// Camera vertical tracking hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraHint {
    StartVertical,
    StopVertical,
}

pub trait CameraHintSink {
    fn hint(&mut self, hint: CameraHint);
}
