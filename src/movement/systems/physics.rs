//! Movement domain: avian2d implementation of the controller's physics seam.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, PhysicsWorld, SurfaceMask};

/// One character's body for the duration of a fixed tick.
///
/// Gravity is integrated by avian2d; impulses and forces are folded into
/// `LinearVelocity` directly so they take effect within the same step.
pub(crate) struct AvianWorld<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub velocity: &'a mut LinearVelocity,
    pub mass: f32,
    pub gravity: f32,
    pub dt: f32,
}

fn surface_filter(mask: SurfaceMask) -> SpatialQueryFilter {
    match mask {
        SurfaceMask::Ground => SpatialQueryFilter::from_mask(GameLayer::Ground),
        SurfaceMask::Wall => SpatialQueryFilter::from_mask(GameLayer::Wall),
    }
}

impl PhysicsWorld for AvianWorld<'_, '_, '_> {
    fn query_circle_overlap(&self, center: Vec2, radius: f32, mask: SurfaceMask) -> bool {
        !self
            .spatial_query
            .shape_intersections(&Collider::circle(radius), center, 0.0, &surface_filter(mask))
            .is_empty()
    }

    fn query_rect_overlap(&self, corner_a: Vec2, corner_b: Vec2, mask: SurfaceMask) -> bool {
        let center = (corner_a + corner_b) * 0.5;
        let size = (corner_b - corner_a).abs();
        !self
            .spatial_query
            .shape_intersections(
                &Collider::rectangle(size.x, size.y),
                center,
                0.0,
                &surface_filter(mask),
            )
            .is_empty()
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse / self.mass;
    }

    fn apply_force(&mut self, force: Vec2) {
        self.velocity.0 += force / self.mass * self.dt;
    }

    fn gravity_magnitude(&self) -> f32 {
        self.gravity
    }

    fn mass(&self) -> f32 {
        self.mass
    }
}
