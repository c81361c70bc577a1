use crate::movement::CharacterState;

/// Turn the character around. Presentation mirrors the sprite from `facing`.
pub(crate) fn flip(state: &mut CharacterState) {
    state.facing = state.facing.flipped();
}

/// Flip when a non-zero input points away from the current facing.
pub(crate) fn face_input(state: &mut CharacterState, input: f32) {
    if state.facing.opposes(input) {
        flip(state);
    }
}
