//! Mode transition event and observer.
//!
//! Systems request a change to the high-level [`Modes`] by writing
//! [`NextMode`]. Emitting a [`ModeChangedEvent`] then triggers the observer
//! in this module, which applies the transition to [`GameMode`] and invokes
//! the appropriate enter/exit systems stored in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! This decouples the intent to change mode from the mechanics of running
//! scene setup/teardown systems and avoids borrowing conflicts.
use crate::resources::mode::{GameMode, Modes, NextMode};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending mode transition should be applied.
///
/// Emitting this event causes [`observe_mode_change_event`] to read
/// [`NextMode`]. If a change is pending, the observer updates the
/// authoritative [`GameMode`], runs exit/enter hooks, and clears the pending
/// value; otherwise nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct ModeChangedEvent {}

/// Observer that applies a pending mode transition.
///
/// Contract
/// - Takes the intention out of [`NextMode`].
/// - If pending, copies the new value into [`GameMode`], then:
///   - calls the exit hook for the previous mode
///   - calls the enter hook for the new mode
/// - If any required resource is missing, logs a diagnostic and returns.
///
/// Hooks run via system IDs looked up in [`SystemsStore`] under the keys
/// `"enter_level"` and `"exit_level"`. The enter hook reads the level id
/// from the already-updated [`GameMode`].
pub fn observe_mode_change_event(
    _trigger: On<ModeChangedEvent>,
    mut commands: Commands,
    mut next_mode: Option<ResMut<NextMode>>,
    mut game_mode: Option<ResMut<GameMode>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("ModeChangedEvent triggered");

    if let (Some(next_mode), Some(game_mode)) =
        (next_mode.as_deref_mut(), game_mode.as_deref_mut())
    {
        match next_mode.take() {
            Some(new_mode) => {
                let old_mode = game_mode.current;
                info!("Switching from {:?} to {:?}", old_mode, new_mode);
                game_mode.current = new_mode;
                on_mode_exit(old_mode, &mut commands, &systems_store);
                on_mode_enter(new_mode, &mut commands, &systems_store);
            }
            None => {
                debug!("No mode change pending.");
            }
        }
    } else {
        warn!(
            "One or more resources missing in observe_mode_change_event. next_mode: {:?}, game_mode: {:?}",
            next_mode.is_some(),
            game_mode.is_some()
        );
    }
}

/// Internal: run the "enter" hook for the given mode.
fn on_mode_enter(mode: Modes, commands: &mut Commands, systems_store: &SystemsStore) {
    match mode {
        Modes::Overworld => debug!("Entered overworld"),
        Modes::InLevel(id) => match systems_store.get("enter_level") {
            Some(id_sys) => {
                debug!("Entering level {}", id);
                commands.run_system(*id_sys);
            }
            None => warn!("enter_level hook not found in SystemsStore"),
        },
    }
}

/// Internal: run the "exit" hook for the given mode.
fn on_mode_exit(mode: Modes, commands: &mut Commands, systems_store: &SystemsStore) {
    match mode {
        Modes::Overworld => debug!("Exited overworld"),
        Modes::InLevel(id) => match systems_store.get("exit_level") {
            Some(id_sys) => {
                debug!("Leaving level {}", id);
                commands.run_system(*id_sys);
            }
            None => warn!("exit_level hook not found in SystemsStore"),
        },
    }
}
