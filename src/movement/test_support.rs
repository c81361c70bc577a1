//! Test doubles for the controller's collaborator seams.

use bevy::prelude::*;

use crate::movement::{
    AnimationFrame, AnimationSink, CameraHint, CameraHintSink, CharacterController, JumpAction,
    MovementTuning, PhysicsWorld, SensorLayout, SurfaceMask, TickInput,
};

pub(crate) const BODY_HALF_EXTENTS: Vec2 = Vec2::new(12.0, 24.0);
pub(crate) const TICK_DT: f32 = 1.0 / 60.0;

pub(crate) fn sensors() -> SensorLayout {
    SensorLayout::for_body(BODY_HALF_EXTENTS, 2.0)
}

pub(crate) fn controller(tuning: MovementTuning) -> CharacterController {
    CharacterController::new(tuning, sensors()).unwrap()
}

pub(crate) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

#[derive(Debug, Clone, Copy)]
struct Surface {
    mask: SurfaceMask,
    min: Vec2,
    max: Vec2,
}

/// Static axis-aligned surfaces around a character standing at the origin.
#[derive(Debug, Clone)]
pub(crate) struct ScriptedWorld {
    surfaces: Vec<Surface>,
    pub velocity: Vec2,
    pub mass: f32,
    pub gravity: f32,
    pub dt: f32,
}

impl ScriptedWorld {
    pub fn airborne() -> Self {
        Self {
            surfaces: Vec::new(),
            velocity: Vec2::ZERO,
            mass: 1.0,
            gravity: 1800.0,
            dt: TICK_DT,
        }
    }

    pub fn on_floor() -> Self {
        Self::airborne().with_floor()
    }

    pub fn with_box(mut self, mask: SurfaceMask, center: Vec2, size: Vec2) -> Self {
        self.surfaces.push(Surface {
            mask,
            min: center - size * 0.5,
            max: center + size * 0.5,
        });
        self
    }

    /// Floor whose top is level with the feet.
    pub fn with_floor(self) -> Self {
        self.with_box(
            SurfaceMask::Ground,
            Vec2::new(0.0, -BODY_HALF_EXTENTS.y - 10.0),
            Vec2::new(400.0, 20.0),
        )
    }

    /// Ground-masked slab one unit above the head.
    pub fn with_ceiling(self) -> Self {
        self.with_box(
            SurfaceMask::Ground,
            Vec2::new(0.0, BODY_HALF_EXTENTS.y + 11.0),
            Vec2::new(400.0, 20.0),
        )
    }

    /// Wall flush against the right side of the body.
    pub fn with_wall_right(self) -> Self {
        self.with_box(
            SurfaceMask::Wall,
            Vec2::new(BODY_HALF_EXTENTS.x + 10.0, 0.0),
            Vec2::new(20.0, 200.0),
        )
    }

    /// Wall flush against the left side of the body.
    pub fn with_wall_left(self) -> Self {
        self.with_box(
            SurfaceMask::Wall,
            Vec2::new(-BODY_HALF_EXTENTS.x - 10.0, 0.0),
            Vec2::new(20.0, 200.0),
        )
    }

    /// Drop every surface on `mask`.
    pub fn without(mut self, mask: SurfaceMask) -> Self {
        self.surfaces.retain(|surface| surface.mask != mask);
        self
    }
}

impl PhysicsWorld for ScriptedWorld {
    fn query_circle_overlap(&self, center: Vec2, radius: f32, mask: SurfaceMask) -> bool {
        self.surfaces
            .iter()
            .filter(|surface| surface.mask == mask)
            .any(|surface| {
                let closest = center.clamp(surface.min, surface.max);
                closest.distance_squared(center) <= radius * radius
            })
    }

    fn query_rect_overlap(&self, corner_a: Vec2, corner_b: Vec2, mask: SurfaceMask) -> bool {
        let min = corner_a.min(corner_b);
        let max = corner_a.max(corner_b);
        self.surfaces
            .iter()
            .filter(|surface| surface.mask == mask)
            .any(|surface| {
                min.x <= surface.max.x
                    && max.x >= surface.min.x
                    && min.y <= surface.max.y
                    && max.y >= surface.min.y
            })
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse / self.mass;
    }

    fn apply_force(&mut self, force: Vec2) {
        self.velocity += force / self.mass * self.dt;
    }

    fn gravity_magnitude(&self) -> f32 {
        self.gravity
    }

    fn mass(&self) -> f32 {
        self.mass
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingAnimation(pub Vec<AnimationFrame>);

impl AnimationSink for RecordingAnimation {
    fn publish(&mut self, frame: AnimationFrame) {
        self.0.push(frame);
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingCamera(pub Vec<CameraHint>);

impl CameraHintSink for RecordingCamera {
    fn hint(&mut self, hint: CameraHint) {
        self.0.push(hint);
    }
}

/// Run one full tick at the origin, discarding presentation output.
pub(crate) fn step(
    controller: &mut CharacterController,
    world: &mut ScriptedWorld,
    input: TickInput,
) -> Option<JumpAction> {
    controller.tick(
        world,
        Vec2::ZERO,
        &input,
        &mut RecordingAnimation::default(),
        &mut RecordingCamera::default(),
    )
}

pub(crate) fn press_jump() -> TickInput {
    TickInput {
        jump_pressed: true,
        jump_held: true,
        ..default()
    }
}

pub(crate) fn hold_jump() -> TickInput {
    TickInput {
        jump_held: true,
        jetpack_held: true,
        ..default()
    }
}
