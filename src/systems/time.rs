//! Simulation clock update.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance [`WorldTime`] by one frame of `dt` seconds, honoring the time
/// scale. Called by the host loop before the schedule runs.
pub fn update_world_time(world: &mut World, dt: f32) {
    if let Some(mut time) = world.get_resource_mut::<WorldTime>() {
        let scaled = dt * time.time_scale;
        time.delta = scaled;
        time.elapsed += scaled;
        time.frame_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_world_time_accumulates() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, 1.0 / 60.0);
        update_world_time(&mut world, 1.0 / 60.0);
        let time = world.resource::<WorldTime>();
        assert_eq!(time.frame_count, 2);
        assert!((time.elapsed - 2.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_time_scale_applies_to_delta() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(0.5));
        update_world_time(&mut world, 0.02);
        assert!((world.resource::<WorldTime>().delta - 0.01).abs() < 1e-6);
    }
}
