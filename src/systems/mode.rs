//! Pending mode detection and the run conditions derived from the mode.

use bevy_ecs::prelude::*;
use log::debug;

use crate::events::mode::ModeChangedEvent;
use crate::resources::mode::{GameMode, Modes, NextMode, NextModes};

/// Fire the transition event when a mode change is pending. Runs at the top
/// of the frame so the observer applies the change before any gameplay
/// system reads [`GameMode`].
pub fn check_pending_mode(next_mode: Res<NextMode>, mut commands: Commands) {
    if let NextModes::Pending(mode) = next_mode.next {
        debug!("Pending mode change to {:?}", mode);
        commands.trigger(ModeChangedEvent {});
    }
}

/// Run condition: the simulation is inside a level.
pub fn mode_is_level(mode: Res<GameMode>) -> bool {
    matches!(mode.current, Modes::InLevel(_))
}

/// Run condition: the simulation is on the overworld map.
pub fn mode_is_overworld(mode: Res<GameMode>) -> bool {
    mode.current == Modes::Overworld
}
