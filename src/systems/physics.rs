//! Fixed-point motion integration and vertical collision resolution.

use bevy_ecs::prelude::*;

use crate::components::body::{Body, Rect};
use crate::components::player::Player;
use crate::fixed::from_px;
use crate::resources::config::Tuning;
use crate::resources::level::Level;

/// Advance one body by one frame against static geometry.
///
/// Order per frame: gravity, integrate both axes, clamp `x` to the level,
/// then vertical-only resolution. There is no terminal velocity and no
/// horizontal push-out; a tall enough fall can step past a thin collider
/// in a single frame because the snap window is one tile.
///
/// Resolution walks colliders in storage order against the rect as it was
/// after integration; a snap does not refresh it, so when several colliders
/// overlap in conflicting ways the last write wins.
pub fn step_body(body: &mut Body, colliders: &[Rect], tuning: &Tuning, level_width_px: i32) {
    body.vy += tuning.gravity;
    body.x += body.vx;
    body.y += body.vy;

    let max_x = from_px((level_width_px - body.w).max(0));
    body.x = body.x.clamp(0, max_x);

    body.on_ground = false;
    let rect = body.rect();
    for collider in colliders {
        if !rect.overlaps(collider) {
            continue;
        }
        if body.vy > 0 && rect.bottom() - collider.top() < tuning.snap_px {
            body.y = from_px(collider.top() - body.h);
            body.vy = 0;
            body.on_ground = true;
        } else if body.vy < 0 && collider.bottom() - rect.top() < tuning.snap_px {
            body.y = from_px(collider.bottom());
            body.vy = tuning.bump;
        }
    }
}

/// Per-frame physics for the player. Enemies are driven by their patrol
/// drift alone and skip gravity entirely.
pub fn player_physics(
    tuning: Res<Tuning>,
    level: Res<Level>,
    mut query: Query<&mut Body, With<Player>>,
) {
    for mut body in query.iter_mut() {
        step_body(&mut body, &level.colliders, &tuning, level.width_px);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::{FX_ONE, to_px};
    use crate::resources::config::EngineConfig;

    fn tuning() -> Tuning {
        Tuning::from_config(&EngineConfig::new())
    }

    #[test]
    fn test_velocity_integrates_into_position() {
        let tuning = tuning();
        let mut body = Body::new(100, 50, 24, 32);
        body.vx = 3 * FX_ONE;
        step_body(&mut body, &[], &tuning, 600);
        assert_eq!(to_px(body.x), 103);
        assert_eq!(body.vy, tuning.gravity);
    }

    #[test]
    fn test_landing_snaps_and_grounds() {
        let tuning = tuning();
        let floor = [Rect::new(0, 360, 600, 12)];
        let mut body = Body::new(100, 320, 24, 32);
        for _ in 0..20 {
            step_body(&mut body, &floor, &tuning, 600);
        }
        assert!(body.on_ground);
        assert_eq!(to_px(body.y), 360 - 32);
        assert_eq!(body.vy, 0);
    }

    #[test]
    fn test_head_bump_pushes_back_down() {
        let tuning = tuning();
        let ceiling = [Rect::new(0, 100, 600, 16)];
        let mut body = Body::new(100, 120, 24, 32);
        body.vy = -5 * FX_ONE;
        step_body(&mut body, &ceiling, &tuning, 600);
        assert_eq!(to_px(body.y), 116);
        assert_eq!(body.vy, tuning.bump);
        assert!(!body.on_ground);
    }

    #[test]
    fn test_conflicting_overlaps_last_collider_wins() {
        let tuning = tuning();
        // A low ceiling followed by a ledge, both overlapping the body on
        // the same frame. The ceiling bumps the body downward, then the
        // ledge is tested against the pre-snap rect and lands it.
        let colliders = [Rect::new(100, 330, 64, 12), Rect::new(100, 358, 64, 12)];
        let mut body = Body::new(110, 341, 24, 32);
        body.vy = -(FX_ONE + tuning.gravity);
        step_body(&mut body, &colliders, &tuning, 600);
        assert_eq!(to_px(body.y), 358 - 32);
        assert_eq!(body.vy, 0);
        assert!(body.on_ground);
    }

    #[test]
    fn test_x_clamped_to_level_bounds() {
        let tuning = tuning();
        let mut body = Body::new(2, 0, 24, 32);
        body.vx = -tuning.max_vx;
        step_body(&mut body, &[], &tuning, 600);
        assert_eq!(body.x, 0);

        let mut body = Body::new(590, 0, 24, 32);
        body.vx = tuning.max_vx;
        step_body(&mut body, &[], &tuning, 600);
        assert_eq!(to_px(body.x), 600 - 24);
    }

    #[test]
    fn test_no_horizontal_push_out() {
        let tuning = tuning();
        // Wall much taller than the snap window beside a grounded body.
        let wall = [Rect::new(200, 200, 16, 160)];
        let mut body = Body::new(180, 240, 24, 32);
        body.vx = 2 * FX_ONE;
        body.vy = 0;
        let before_y = body.y;
        step_body(&mut body, &wall, &tuning, 600);
        // Deep vertical overlap fails both snap tests, so the body clips
        // straight through.
        assert_eq!(to_px(body.x), 182);
        assert!(body.y > before_y);
    }

    #[test]
    fn test_long_fall_tunnels_through_thin_platform() {
        let tuning = tuning();
        let thin = [Rect::new(0, 200, 600, 12)];
        let mut body = Body::new(100, 195 - 32, 24, 32);
        // Velocity accumulated over a long fall: 40 px per frame.
        body.vy = 40 * FX_ONE;
        step_body(&mut body, &thin, &tuning, 600);
        // Bottom lands far below the platform top; outside the one-tile
        // snap window, so no resolution happens.
        assert!(!body.on_ground);
        assert!(to_px(body.y) > 200);
        assert!(body.vy > 40 * FX_ONE);
    }

    #[test]
    fn test_gravity_has_no_terminal_velocity() {
        let tuning = tuning();
        let mut body = Body::new(100, 0, 24, 32);
        let mut last_vy = body.vy;
        for _ in 0..600 {
            step_body(&mut body, &[], &tuning, 600);
            assert!(body.vy > last_vy);
            last_vy = body.vy;
        }
        assert_eq!(last_vy, 600 * tuning.gravity);
    }
}
