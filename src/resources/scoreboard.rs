//! Run-wide tallies and the per-level countdown clock.

use bevy_ecs::prelude::Resource;

/// Lives and coin count. Lives persist across levels and across deaths;
/// the coin tally is reset when a level is entered.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Scoreboard {
    pub lives: i32,
    pub coins: u32,
    start_lives: i32,
}

impl Scoreboard {
    pub fn new(start_lives: i32) -> Self {
        Self {
            lives: start_lives,
            coins: 0,
            start_lives,
        }
    }

    /// Take one life. Returns true when the counter ran out, in which case
    /// the count is already rolled back to the starting value.
    pub fn lose_life(&mut self) -> bool {
        self.lives -= 1;
        if self.lives <= 0 {
            self.lives = self.start_lives;
            true
        } else {
            false
        }
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Level countdown. Ticks down one unit every 60 frames, matching the
/// fixed simulation rate, so a full second of play costs one unit.
#[derive(Resource, Debug, Clone, Copy)]
pub struct LevelClock {
    pub remaining: i32,
    frame_acc: u32,
    start: i32,
}

impl LevelClock {
    pub fn new(start: i32) -> Self {
        Self {
            remaining: start,
            frame_acc: 0,
            start,
        }
    }

    /// Advance by one frame. Returns true on the frame the clock hits zero.
    pub fn tick_frame(&mut self) -> bool {
        if self.remaining <= 0 {
            return false;
        }
        self.frame_acc += 1;
        if self.frame_acc >= 60 {
            self.frame_acc = 0;
            self.remaining -= 1;
            return self.remaining == 0;
        }
        false
    }

    pub fn reset(&mut self) {
        self.remaining = self.start;
        self.frame_acc = 0;
    }
}

impl Default for LevelClock {
    fn default() -> Self {
        Self::new(999)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lose_life_resets_at_zero() {
        let mut board = Scoreboard::new(2);
        assert!(!board.lose_life());
        assert_eq!(board.lives, 1);
        assert!(board.lose_life());
        assert_eq!(board.lives, 2);
    }

    #[test]
    fn test_clock_ticks_once_per_sixty_frames() {
        let mut clock = LevelClock::new(999);
        for _ in 0..59 {
            assert!(!clock.tick_frame());
        }
        assert_eq!(clock.remaining, 999);
        assert!(!clock.tick_frame());
        assert_eq!(clock.remaining, 998);
    }

    #[test]
    fn test_clock_signals_expiry_exactly_once() {
        let mut clock = LevelClock::new(1);
        let mut expiries = 0;
        for _ in 0..180 {
            if clock.tick_frame() {
                expiries += 1;
            }
        }
        assert_eq!(expiries, 1);
        assert_eq!(clock.remaining, 0);
    }

    #[test]
    fn test_reset_restores_start_value() {
        let mut clock = LevelClock::new(5);
        for _ in 0..120 {
            clock.tick_frame();
        }
        clock.reset();
        assert_eq!(clock.remaining, 5);
    }
}
