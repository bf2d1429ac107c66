//! Player control.

use bevy_ecs::prelude::*;

use crate::components::body::Body;
use crate::components::player::Player;
use crate::events::sound::SoundCue;
use crate::resources::config::Tuning;
use crate::resources::input::InputState;

/// Apply horizontal control and jumping to the player body.
///
/// Held direction adds acceleration; no direction decays `vx` toward zero
/// by friction without crossing it. `|vx|` is clamped to the max speed.
/// Jump fires while the jump action is held and the body is grounded, so
/// holding the button hops again on every landing.
pub fn player_control(
    input: Res<InputState>,
    tuning: Res<Tuning>,
    mut cues: MessageWriter<SoundCue>,
    mut query: Query<&mut Body, With<Player>>,
) {
    for mut body in query.iter_mut() {
        let mut ax = 0;
        if input.move_left.active {
            ax -= tuning.accel;
        }
        if input.move_right.active {
            ax += tuning.accel;
        }
        body.vx += ax;
        if ax == 0 {
            if body.vx > 0 {
                body.vx = (body.vx - tuning.friction).max(0);
            } else if body.vx < 0 {
                body.vx = (body.vx + tuning.friction).min(0);
            }
        }
        body.vx = body.vx.clamp(-tuning.max_vx, tuning.max_vx);

        if input.jump.active && body.on_ground {
            body.vy = tuning.jump_v;
            body.on_ground = false;
            cues.write(SoundCue::Jump);
        }
    }
}
