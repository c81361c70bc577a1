//! Movement domain: components, contact snapshot and per-character state.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::AnimationFrame;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, ceilings)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1.0 when facing right, -1.0 when facing left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// Whether a horizontal input points away from this facing.
    pub fn opposes(self, input: f32) -> bool {
        match self {
            Facing::Right => input < 0.0,
            Facing::Left => input > 0.0,
        }
    }
}

/// Contact classification produced by the sensors once per tick.
///
/// Only constructible through [`Contact::new`], which keeps `walled`
/// equal to `walled_front || walled_back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contact {
    grounded: bool,
    ceiling_blocked: bool,
    walled_front: bool,
    walled_back: bool,
    walled: bool,
}

impl Contact {
    pub fn new(
        grounded: bool,
        ceiling_blocked: bool,
        walled_front: bool,
        walled_back: bool,
    ) -> Self {
        Self {
            grounded,
            ceiling_blocked,
            walled_front,
            walled_back,
            walled: walled_front || walled_back,
        }
    }

    pub fn grounded(&self) -> bool {
        self.grounded
    }

    pub fn ceiling_blocked(&self) -> bool {
        self.ceiling_blocked
    }

    pub fn walled_front(&self) -> bool {
        self.walled_front
    }

    pub fn walled_back(&self) -> bool {
        self.walled_back
    }

    pub fn walled(&self) -> bool {
        self.walled
    }
}

/// Mutable record shared by every controller stage of one character.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterState {
    pub facing: Facing,
    pub contact: Contact,
    /// Air actions consumed since the last reset; the ground jump counts as the first.
    pub air_jump_count: u32,
    pub jetpack_active: bool,
    pub crouching: bool,
    pub input_ignore_ticks_remaining: u32,
    /// Ramp-in ticks queued by a wall jump, consumed once the ignore window is over.
    pub input_ramp_ticks_remaining: u32,
    /// Set by a ground jump until the next reset or jetpack activation.
    pub ground_jump_active: bool,
    /// Horizontal speed input last applied on the ground, for animation.
    pub ground_speed: f32,
}

impl CharacterState {
    pub fn facing_right(&self) -> bool {
        self.facing == Facing::Right
    }

    /// Counters above the limit count as exhausted too.
    pub fn air_jumps_exhausted(&self, max_air_jumps: u32) -> bool {
        self.air_jump_count >= max_air_jumps
    }

    /// Respawn reset: clears counters and modes, keeps facing.
    pub fn reset(&mut self) {
        self.air_jump_count = 0;
        self.jetpack_active = false;
        self.input_ignore_ticks_remaining = 0;
        self.input_ramp_ticks_remaining = 0;
        self.ground_jump_active = false;
    }
}

/// Sensor probe tag on a child entity of the character.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    Ground,
    Ceiling,
    WallFront,
    WallBack,
}

impl ProbeKind {
    /// Entity name used when spawning the probe.
    pub fn name(self) -> &'static str {
        match self {
            ProbeKind::Ground => "GroundCheck",
            ProbeKind::Ceiling => "CeilingCheck",
            ProbeKind::WallFront => "WallCheckFront",
            ProbeKind::WallBack => "WallCheckBack",
        }
    }
}

impl std::fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Latest animation parameters published by the controller.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationParams(pub AnimationFrame);
