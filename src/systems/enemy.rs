//! Enemy patrol movement.

use bevy_ecs::prelude::*;

use crate::components::body::Body;
use crate::components::patrol::Patrol;

/// Drift each patrolling body by its per-frame delta. No collision, no
/// gravity, no turnaround; walking off the level is accepted.
pub fn enemy_patrol(mut query: Query<(&mut Body, &Patrol)>) {
    for (mut body, patrol) in query.iter_mut() {
        body.x += patrol.dx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::{FX_ONE, to_px};

    #[test]
    fn test_patrol_drifts_one_pixel_per_frame() {
        let mut world = World::new();
        let goomba = world.spawn((Body::new(260, 328, 24, 24), Patrol::goomba())).id();
        let koopa = world.spawn((Body::new(400, 140, 24, 24), Patrol::koopa())).id();
        let mut schedule = Schedule::default();
        schedule.add_systems(enemy_patrol);
        for _ in 0..10 {
            schedule.run(&mut world);
        }
        let g = world.get::<Body>(goomba).unwrap();
        let k = world.get::<Body>(koopa).unwrap();
        assert_eq!(to_px(g.x), 250);
        assert_eq!(to_px(k.x), 410);
        assert_eq!(g.x % FX_ONE, 0);
    }
}
