//! Input edge derivation.

use bevy_ecs::prelude::*;

use crate::resources::input::{InputSnapshot, InputState};

/// Diff the host-provided [`InputSnapshot`] against last frame's
/// [`InputState`] to derive press and release edges. Runs first in the
/// frame so every other system sees consistent input.
pub fn update_input_state(snapshot: Res<InputSnapshot>, mut input: ResMut<InputState>) {
    input.move_left.update(snapshot.move_left);
    input.move_right.update(snapshot.move_right);
    input.jump.update(snapshot.jump);
    input.confirm.update(snapshot.confirm);
    input.cancel.update(snapshot.cancel);
    input.navigate_up.update(snapshot.navigate_up);
    input.navigate_down.update(snapshot.navigate_down);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_follow_snapshot_changes() {
        let mut world = World::new();
        world.insert_resource(InputSnapshot {
            jump: true,
            ..Default::default()
        });
        world.insert_resource(InputState::default());
        let mut schedule = Schedule::default();
        schedule.add_systems(update_input_state);

        schedule.run(&mut world);
        assert!(world.resource::<InputState>().jump.just_pressed);

        schedule.run(&mut world);
        let input = world.resource::<InputState>();
        assert!(input.jump.active && !input.jump.just_pressed);

        world.resource_mut::<InputSnapshot>().jump = false;
        schedule.run(&mut world);
        assert!(world.resource::<InputState>().jump.just_released);
    }
}
