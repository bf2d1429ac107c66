//! Camera follow.

use bevy_ecs::prelude::*;

use crate::components::body::Body;
use crate::components::player::Player;
use crate::fixed::to_px;
use crate::resources::camera::{Camera, camera_offset};
use crate::resources::config::EngineConfig;
use crate::resources::level::Level;

/// Recompute the scroll offset from the player's current position.
/// Stateless beyond the clamp bounds, so it runs after physics each frame.
pub fn follow_player(
    config: Res<EngineConfig>,
    level: Res<Level>,
    mut camera: ResMut<Camera>,
    player: Query<&Body, With<Player>>,
) {
    for body in player.iter() {
        camera.offset_x = camera_offset(to_px(body.x), config.view_width, level.width_px);
    }
}
