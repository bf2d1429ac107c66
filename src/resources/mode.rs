//! Simulation mode resources.
//!
//! [`GameMode`] holds the mode the schedule is currently running under.
//! Systems never flip it directly; they request a change through
//! [`NextMode`], which `check_pending_mode` applies at the top of the next
//! frame before triggering the transition observer. That keeps every system
//! in one frame agreeing on the mode.

use bevy_ecs::prelude::Resource;

use crate::resources::level::LevelId;

/// The two modes the simulation runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modes {
    /// Navigating the map between levels.
    Overworld,
    /// Playing the identified level.
    InLevel(LevelId),
}

/// Currently active mode.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMode {
    pub current: Modes,
}

impl Default for GameMode {
    fn default() -> Self {
        Self {
            current: Modes::Overworld,
        }
    }
}

/// A requested mode change, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NextModes {
    #[default]
    Unchanged,
    Pending(Modes),
}

/// Staging slot for the next mode. Written by gameplay systems, consumed by
/// `check_pending_mode`. A later write in the same frame wins.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct NextMode {
    pub next: NextModes,
}

impl NextMode {
    pub fn request(&mut self, mode: Modes) {
        self.next = NextModes::Pending(mode);
    }

    /// Clear and return the pending request, if any.
    pub fn take(&mut self) -> Option<Modes> {
        match std::mem::take(&mut self.next) {
            NextModes::Unchanged => None,
            NextModes::Pending(mode) => Some(mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_clears_pending_request() {
        let mut next = NextMode::default();
        assert_eq!(next.take(), None);
        next.request(Modes::InLevel(LevelId::new(1, 2)));
        assert_eq!(next.take(), Some(Modes::InLevel(LevelId::new(1, 2))));
        assert_eq!(next.take(), None);
    }

    #[test]
    fn test_later_request_wins() {
        let mut next = NextMode::default();
        next.request(Modes::InLevel(LevelId::new(1, 1)));
        next.request(Modes::Overworld);
        assert_eq!(next.take(), Some(Modes::Overworld));
    }
}
