//! Grounding and wall sensing.

use bevy::prelude::*;

use crate::movement::{
    Contact, ControllerError, Facing, MovementTuning, PhysicsWorld, ProbeKind, SurfaceMask,
};

/// Probe offsets relative to the character origin, authored facing right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorLayout {
    pub ground: Vec2,
    pub ceiling: Vec2,
    pub wall_front: Vec2,
    pub wall_back: Vec2,
}

impl SensorLayout {
    /// Resolve a layout from tagged probe offsets. Every probe must appear exactly once.
    pub fn from_probes(
        probes: impl IntoIterator<Item = (ProbeKind, Vec2)>,
    ) -> Result<Self, ControllerError> {
        let mut found: [Option<Vec2>; 4] = [None; 4];
        for (kind, offset) in probes {
            let slot = &mut found[slot_index(kind)];
            if slot.is_some() {
                return Err(ControllerError::DuplicateProbe(kind));
            }
            *slot = Some(offset);
        }

        let take = |kind: ProbeKind| {
            found[slot_index(kind)].ok_or(ControllerError::MissingProbe(kind))
        };
        Ok(Self {
            ground: take(ProbeKind::Ground)?,
            ceiling: take(ProbeKind::Ceiling)?,
            wall_front: take(ProbeKind::WallFront)?,
            wall_back: take(ProbeKind::WallBack)?,
        })
    }

    /// Layout for a box-shaped body of the given half extents.
    pub fn for_body(half_extents: Vec2, wall_gap: f32) -> Self {
        Self {
            ground: Vec2::new(0.0, -half_extents.y),
            ceiling: Vec2::new(0.0, half_extents.y),
            wall_front: Vec2::new(half_extents.x + wall_gap, 0.0),
            wall_back: Vec2::new(-(half_extents.x + wall_gap), 0.0),
        }
    }
}

fn slot_index(kind: ProbeKind) -> usize {
    match kind {
        ProbeKind::Ground => 0,
        ProbeKind::Ceiling => 1,
        ProbeKind::WallFront => 2,
        ProbeKind::WallBack => 3,
    }
}

/// Classify contacts at `position`. Every probe offset mirrors with the facing.
pub(crate) fn sense(
    world: &impl PhysicsWorld,
    position: Vec2,
    facing: Facing,
    layout: &SensorLayout,
    tuning: &MovementTuning,
) -> Contact {
    let mirror = |offset: Vec2| Vec2::new(offset.x * facing.sign(), offset.y);

    let grounded = world.query_circle_overlap(
        position + mirror(layout.ground),
        tuning.ground_probe_radius,
        SurfaceMask::Ground,
    );
    let ceiling_blocked = world.query_circle_overlap(
        position + mirror(layout.ceiling),
        tuning.ceiling_probe_radius,
        SurfaceMask::Ground,
    );

    let half = Vec2::new(tuning.wall_probe_half_width, tuning.wall_probe_half_height);
    let wall_probe = |offset: Vec2| {
        let center = position + mirror(offset);
        world.query_rect_overlap(center - half, center + half, SurfaceMask::Wall)
    };
    let walled_front = wall_probe(layout.wall_front);
    let walled_back = wall_probe(layout.wall_back);

    Contact::new(grounded, ceiling_blocked, walled_front, walled_back)
}
