//! Overworld cursor navigation and level entry.

use bevy_ecs::prelude::*;
use log::info;

use crate::resources::input::InputState;
use crate::resources::mode::{Modes, NextMode};
use crate::resources::overworld::Overworld;
use crate::resources::worldtime::WorldTime;

/// Drive the map cursor from held directions and confirm into the bound
/// level. Horizontal moves step along the stage row; vertical moves switch
/// world rows. The cooldown inside [`Overworld`] paces held keys.
pub fn overworld_nav(
    time: Res<WorldTime>,
    input: Res<InputState>,
    mut overworld: ResMut<Overworld>,
    mut next_mode: ResMut<NextMode>,
) {
    overworld.tick(time.delta);

    if input.move_left.active {
        overworld.move_node(-1);
    } else if input.move_right.active {
        overworld.move_node(1);
    } else if input.navigate_up.active {
        overworld.switch_world(-1);
    } else if input.navigate_down.active {
        overworld.switch_world(1);
    }

    if input.confirm.just_pressed {
        let id = overworld.current_level();
        info!("Entering level {} from node '{}'", id, overworld.current_node().name);
        next_mode.request(Modes::InLevel(id));
    }
}
