//! Movement and jump decision core for a 2D platformer character, with a
//! Bevy + avian2d integration.

pub mod content;
pub mod movement;
