//! Platformer input-to-velocity controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! steers entities with an
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! component: walk input replaces the horizontal velocity each tick, jump
//! input launches the body when it is standing on ground.

use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::kinematicbody::KinematicBody;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Update each controlled entity's `KinematicBody` velocity based on input.
pub fn platform_input_controller(
    mut query: Query<(&InputControlled, &mut KinematicBody)>,
    input_state: Res<InputState>,
    time: Res<WorldTime>,
) {
    for (control, mut body) in query.iter_mut() {
        // Walk intent replaces (never accumulates into) the horizontal velocity.
        let mut vx = 0.0;
        if input_state.move_left {
            vx -= control.walk_speed * time.delta;
        }
        if input_state.move_right {
            vx += control.walk_speed * time.delta;
        }
        body.velocity.x = vx;

        if input_state.jump && !body.airborne {
            body.jump(control.jump_impulse);
        }
    }
}
