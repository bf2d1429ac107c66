//! Per-frame logical input resources.
//!
//! The core never reads a keyboard. The host shell samples whatever input
//! device it owns and hands the engine an [`InputSnapshot`] of currently held
//! logical actions; [`crate::systems::input::update_input_state`] diffs the
//! snapshot against the previous frame to derive press/release edges in
//! [`InputState`].

use bevy_ecs::prelude::*;

/// Logical actions the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Confirm,
    Cancel,
    NavigateUp,
    NavigateDown,
}

/// Host-provided snapshot of which actions are held this frame.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub confirm: bool,
    pub cancel: bool,
    pub navigate_up: bool,
    pub navigate_down: bool,
    /// Discrete quit request (window close, SIGINT, end of script).
    pub quit: bool,
}

impl InputSnapshot {
    pub fn held(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left,
            Action::MoveRight => self.move_right,
            Action::Jump => self.jump,
            Action::Confirm => self.confirm,
            Action::Cancel => self.cancel,
            Action::NavigateUp => self.navigate_up,
            Action::NavigateDown => self.navigate_down,
        }
    }
}

/// Boolean action state with frame-edge flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionState {
    /// Whether the action is currently held this frame.
    pub active: bool,
    /// Whether the action was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the action was just released this frame.
    pub just_released: bool,
}

impl ActionState {
    /// Advance from last frame's state to this frame's held value.
    pub fn update(&mut self, held: bool) {
        self.just_pressed = held && !self.active;
        self.just_released = !held && self.active;
        self.active = held;
    }
}

/// Resource capturing the per-frame logical input state.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    pub move_left: ActionState,
    pub move_right: ActionState,
    pub jump: ActionState,
    pub confirm: ActionState,
    pub cancel: ActionState,
    pub navigate_up: ActionState,
    pub navigate_down: ActionState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_state_edges() {
        let mut state = ActionState::default();
        state.update(true);
        assert!(state.active && state.just_pressed && !state.just_released);
        state.update(true);
        assert!(state.active && !state.just_pressed && !state.just_released);
        state.update(false);
        assert!(!state.active && !state.just_pressed && state.just_released);
        state.update(false);
        assert!(!state.active && !state.just_pressed && !state.just_released);
    }

    #[test]
    fn test_snapshot_held_lookup() {
        let snapshot = InputSnapshot {
            move_right: true,
            jump: true,
            ..Default::default()
        };
        assert!(snapshot.held(Action::MoveRight));
        assert!(snapshot.held(Action::Jump));
        assert!(!snapshot.held(Action::MoveLeft));
        assert!(!snapshot.held(Action::Confirm));
    }

    #[test]
    fn test_default_input_state_all_inactive() {
        let input = InputState::default();
        assert!(!input.move_left.active);
        assert!(!input.move_right.active);
        assert!(!input.jump.active);
        assert!(!input.confirm.active);
        assert!(!input.cancel.active);
        assert!(!input.navigate_up.active);
        assert!(!input.navigate_down.active);
    }
}
