//! Systems executed by the frame schedule.
//!
//! Overview
//! - `camera` – follow the player with the clamped scroll rule
//! - `enemy` – patrol drift
//! - `input` – derive press/release edges from the host snapshot
//! - `interactions` – pickups, flag win check, and the death flow
//! - `mode` – pending mode detection and mode run conditions
//! - `overworld` – map cursor navigation and level entry
//! - `physics` – fixed-point integration and vertical collision resolution
//! - `player` – horizontal control and jumping
//! - `render` – rebuild the per-frame draw list
//! - `sound` – cue forwarding and the background sink thread
//! - `time` – simulation clock update
pub mod camera;
pub mod enemy;
pub mod input;
pub mod interactions;
pub mod mode;
pub mod overworld;
pub mod physics;
pub mod player;
pub mod render;
pub mod sound;
pub mod time;
