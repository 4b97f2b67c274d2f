//! Per-frame input snapshot.
//!
//! The engine core does not talk to input devices. The windowing front-end
//! samples its keyboard/gamepad once per frame and writes the result here;
//! the platform controller system reads it to steer controlled entities.

use bevy_ecs::prelude::Resource;

/// Abstract movement intent for the current frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct InputState {
    /// Walk left is held.
    pub move_left: bool,
    /// Walk right is held.
    pub move_right: bool,
    /// Jump was requested this frame.
    pub jump: bool,
}
