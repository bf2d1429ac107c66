//! Engine configuration resource.
//!
//! Settings are loaded from an INI file with safe defaults for every key, so
//! a missing or partial file never prevents startup. Physics tuning values
//! are written as real numbers in the file and converted to fixed-point
//! exactly once, in [`Tuning::from_config`]; nothing in the per-frame path
//! touches a float afterwards.
//!
//! # Configuration File Format
//!
//! ```ini
//! [display]
//! width = 600
//! height = 400
//! target_fps = 60
//!
//! [physics]
//! accel = 0.18
//! friction = 0.12
//! max_speed = 2.4
//! jump = 7.0
//! gravity = 0.27
//!
//! [game]
//! lives = 5
//! level_time = 999
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::fixed::{FX_ONE, Fx, from_f32};

/// Default safe values for startup
const DEFAULT_VIEW_WIDTH: i32 = 600;
const DEFAULT_VIEW_HEIGHT: i32 = 400;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_ACCEL: f32 = 0.18;
const DEFAULT_FRICTION: f32 = 0.12;
const DEFAULT_MAX_SPEED: f32 = 2.4;
const DEFAULT_JUMP: f32 = 7.0;
const DEFAULT_GRAVITY: f32 = 0.27;
const DEFAULT_LIVES: i32 = 5;
const DEFAULT_LEVEL_TIME: u32 = 999;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Tile edge in pixels for generated levels.
pub const TILE: i32 = 16;
/// Player spawn point in level space, pixels.
pub const SPAWN: (i32, i32) = (60, 328);
/// Player bounding box, pixels.
pub const PLAYER_SIZE: (i32, i32) = (24, 32);

/// Engine configuration resource.
///
/// Stores viewport dimensions, physics tuning as written in the file, and
/// gameplay counters. Insert once at startup; derive [`Tuning`] from it.
#[derive(Resource, Debug, Clone)]
pub struct EngineConfig {
    /// Viewport width in pixels.
    pub view_width: i32,
    /// Viewport height in pixels.
    pub view_height: i32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Horizontal acceleration, pixels per frame squared.
    pub accel: f32,
    /// Velocity decay when no direction is held, pixels per frame squared.
    pub friction: f32,
    /// Horizontal speed cap, pixels per frame.
    pub max_speed: f32,
    /// Jump impulse magnitude, pixels per frame.
    pub jump: f32,
    /// Downward acceleration, pixels per frame squared.
    pub gravity: f32,
    /// Lives at startup and after a game over.
    pub start_lives: i32,
    /// Level countdown start, in seconds of simulated time.
    pub level_time: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            view_width: DEFAULT_VIEW_WIDTH,
            view_height: DEFAULT_VIEW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            accel: DEFAULT_ACCEL,
            friction: DEFAULT_FRICTION,
            max_speed: DEFAULT_MAX_SPEED,
            jump: DEFAULT_JUMP,
            gravity: DEFAULT_GRAVITY,
            start_lives: DEFAULT_LIVES,
            level_time: DEFAULT_LEVEL_TIME,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [display] section
        if let Some(width) = config.getint("display", "width").ok().flatten() {
            self.view_width = width as i32;
        }
        if let Some(height) = config.getint("display", "height").ok().flatten() {
            self.view_height = height as i32;
        }
        if let Some(fps) = config.getuint("display", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [physics] section
        if let Some(v) = config.getfloat("physics", "accel").ok().flatten() {
            self.accel = v as f32;
        }
        if let Some(v) = config.getfloat("physics", "friction").ok().flatten() {
            self.friction = v as f32;
        }
        if let Some(v) = config.getfloat("physics", "max_speed").ok().flatten() {
            self.max_speed = v as f32;
        }
        if let Some(v) = config.getfloat("physics", "jump").ok().flatten() {
            self.jump = v as f32;
        }
        if let Some(v) = config.getfloat("physics", "gravity").ok().flatten() {
            self.gravity = v as f32;
        }

        // [game] section
        if let Some(v) = config.getint("game", "lives").ok().flatten() {
            self.start_lives = v as i32;
        }
        if let Some(v) = config.getuint("game", "level_time").ok().flatten() {
            self.level_time = v as u32;
        }

        info!(
            "Loaded config: {}x{} view, fps={}, lives={}, level_time={}",
            self.view_width, self.view_height, self.target_fps, self.start_lives, self.level_time
        );

        Ok(())
    }
}

/// Fixed-point physics constants, pre-scaled from [`EngineConfig`] so that
/// the per-frame path stays integer-only.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Tuning {
    /// Horizontal acceleration per held-direction frame.
    pub accel: Fx,
    /// Velocity decay per idle frame, clamped at zero.
    pub friction: Fx,
    /// Horizontal speed cap.
    pub max_vx: Fx,
    /// Jump impulse (negative, up).
    pub jump_v: Fx,
    /// Gravity per frame. There is no terminal velocity.
    pub gravity: Fx,
    /// Post-head-bump downward velocity.
    pub bump: Fx,
    /// Vertical snap window in pixels (one tile).
    pub snap_px: i32,
}

impl Tuning {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            accel: from_f32(config.accel),
            friction: from_f32(config.friction),
            max_vx: from_f32(config.max_speed),
            jump_v: -from_f32(config.jump),
            gravity: from_f32(config.gravity),
            bump: FX_ONE,
            snap_px: TILE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_safe() {
        let config = EngineConfig::new();
        assert_eq!(config.view_width, 600);
        assert_eq!(config.view_height, 400);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.start_lives, 5);
        assert_eq!(config.level_time, 999);
    }

    #[test]
    fn test_tuning_is_scaled_once() {
        let tuning = Tuning::from_config(&EngineConfig::new());
        assert_eq!(tuning.accel, 46); // 0.18 * 256, truncated
        assert_eq!(tuning.friction, 30); // 0.12 * 256
        assert_eq!(tuning.max_vx, 614); // 2.4 * 256
        assert_eq!(tuning.jump_v, -7 * FX_ONE);
        assert_eq!(tuning.gravity, 69); // 0.27 * 256
        assert_eq!(tuning.snap_px, TILE);
    }

    #[test]
    fn test_missing_file_is_an_error_and_keeps_defaults() {
        let mut config = EngineConfig::with_path("./definitely-not-here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.start_lives, 5);
    }
}
