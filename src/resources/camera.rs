//! Horizontal scroll camera.

use bevy_ecs::prelude::Resource;

/// Current horizontal scroll offset in pixels. Vertical never scrolls.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Camera {
    pub offset_x: i32,
}

/// Offset that keeps the player a third of the viewport in from the left,
/// clamped so the view never shows past either level edge. Levels narrower
/// than the viewport pin the camera at zero.
pub fn camera_offset(player_x_px: i32, view_w: i32, level_w_px: i32) -> i32 {
    let max = (level_w_px - view_w).max(0);
    (player_x_px - view_w / 3).clamp(0, max)
}

#[cfg(test)]
mod tests {
    use super::camera_offset;

    #[test]
    fn test_offset_clamps_to_level_bounds() {
        assert_eq!(camera_offset(0, 600, 1776), 0);
        assert_eq!(camera_offset(150, 600, 1776), 0);
        assert_eq!(camera_offset(500, 600, 1776), 300);
        assert_eq!(camera_offset(1770, 600, 1776), 1176);
    }

    #[test]
    fn test_narrow_level_never_scrolls() {
        assert_eq!(camera_offset(590, 600, 600), 0);
        assert_eq!(camera_offset(400, 600, 320), 0);
    }
}
