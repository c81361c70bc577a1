//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod physics;
pub(crate) mod presentation;
pub(crate) mod tick;

pub(crate) use input::read_input;
pub(crate) use presentation::{follow_player, sync_facing};
pub use presentation::CameraTracking;
pub(crate) use tick::{attach_controllers, drive_characters};
